//! Handles all user-facing text produced by the shipped reporters.
//!
//! Listings for panic messages and errors, colorized echo lines for the harness, and
//! line diffs for transcript mismatches all live here so every reporter prints the
//! same way.

use std::io::{self, Write};

use difference::{Changeset, Difference};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::recorder::Record;
use crate::reporter::Policy;

// ============================================================================
// LISTINGS
// ============================================================================

/// One indented line per record: `  <site>: <message>`, or `  <message>` without a site.
pub(crate) fn listing(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| match &record.site {
            Some(site) => format!("  {}: {}", site, record.message),
            None => format!("  {}", record.message),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// ECHO
// ============================================================================

/// Writes `record` to stderr as soon as it is reported.
///
/// Goes through `eprint!` rather than a `StandardStream` so libtest output capture
/// still applies.
pub(crate) fn echo(record: &Record, use_colors: bool) {
    let mut buffer = if use_colors {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    if write_record(&mut buffer, record).is_ok() {
        eprint!("{}", String::from_utf8_lossy(buffer.as_slice()));
    }
}

fn write_record(out: &mut Buffer, record: &Record) -> io::Result<()> {
    let color = match record.policy {
        Policy::Continue => Color::Yellow,
        Policy::Abort => Color::Red,
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", record.policy)?;
    out.reset()?;
    if let Some(site) = &record.site {
        write!(out, " {}", site)?;
    }
    writeln!(out, ": {}", record.message)
}

// ============================================================================
// DIFFS
// ============================================================================

/// Line diff of `expected` against `actual`: ` ` kept, `-` expected only, `+` actual only.
pub(crate) fn diff_lines(expected: &str, actual: &str) -> String {
    let changeset = Changeset::new(expected, actual, "\n");
    let mut lines = Vec::new();
    for diff in &changeset.diffs {
        let (marker, chunk) = match diff {
            Difference::Same(x) => (' ', x),
            Difference::Rem(x) => ('-', x),
            Difference::Add(x) => ('+', x),
        };
        lines.extend(chunk.split('\n').map(|line| format!("{}{}", marker, line)));
    }
    lines.join("\n")
}
