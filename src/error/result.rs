//! Result type alias for hotspot-map operations.

use super::context::ErrorContext;
use super::hotspot_error::HotspotError;

/// Type alias for Results using HotspotError.
pub type HotspotResult<T> = Result<T, HotspotError>;

/// Extension trait for attaching [`ErrorContext`] to failures.
pub trait ResultExt<T> {
    fn context(self, ctx: ErrorContext) -> HotspotResult<T>;

    /// Like [`ResultExt::context`] but only builds the context on error.
    fn with_context<F>(self, f: F) -> HotspotResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<HotspotError>,
{
    fn context(self, ctx: ErrorContext) -> HotspotResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> HotspotResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_context_on_error() {
        let result: Result<(), NetworkError> = Err(NetworkError::status(500));
        let err = result.context(ErrorContext::new("load")).unwrap_err();
        assert_eq!(err.context().unwrap().operation, "load");
    }

    #[test]
    fn test_with_context_lazy_on_ok() {
        let result: Result<u8, NetworkError> = Ok(1);
        let value = result
            .with_context(|| panic!("context must not be built for Ok"))
            .unwrap();
        assert_eq!(value, 1);
    }
}
