//! Output settings for [`Harness`](super::Harness).

use std::env;

/// Environment variable that switches the per-failure echo off when set to `0` or `false`.
pub const ECHO_ENV: &str = "ASSERTKIT_ECHO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Colorize echoed failures.
    pub use_colors: bool,
    /// Print each failure to stderr as it is reported.
    pub echo: bool,
}

impl HarnessConfig {
    /// Defaults, with [`ECHO_ENV`] applied on top.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var(ECHO_ENV) {
            config.echo = parse_flag(&value).unwrap_or(config.echo);
        }
        config
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            use_colors: env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr),
            echo: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
