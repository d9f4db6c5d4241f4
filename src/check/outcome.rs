//! Values that may carry an error, accepted by the error-presence checks.

use std::fmt::Display;

/// Something that either holds an error or does not.
///
/// Implemented for `Option<E>` and `Result<T, E>` where `E: Display`, and for
/// references to either, so table tests can pass `&parse(input)` directly.
pub trait MaybeError {
    fn error(&self) -> Option<&dyn Display>;
}

impl<E: Display> MaybeError for Option<E> {
    fn error(&self) -> Option<&dyn Display> {
        self.as_ref().map(|e| e as &dyn Display)
    }
}

impl<T, E: Display> MaybeError for Result<T, E> {
    fn error(&self) -> Option<&dyn Display> {
        self.as_ref().err().map(|e| e as &dyn Display)
    }
}

impl<M: MaybeError + ?Sized> MaybeError for &M {
    fn error(&self) -> Option<&dyn Display> {
        (**self).error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_and_result_expose_their_error() {
        let none: Option<String> = None;
        assert!(none.error().is_none());

        let some = Some("boom");
        assert_eq!(some.error().map(|e| e.to_string()), Some("boom".into()));

        let ok: Result<u8, String> = Ok(1);
        assert!((&ok).error().is_none());

        let err: Result<u8, String> = Err("bad input".into());
        assert_eq!(err.error().map(|e| e.to_string()), Some("bad input".into()));
    }
}
