use crate::{with_context, BoxError};

/// Extension methods for attaching context to the error arm of a `Result`.
///
/// Both methods widen the error to [`BoxError`], so repeated calls along a
/// call chain keep appending to one underlying
/// [`ContextError`](crate::ContextError) instead of nesting wrappers.
pub trait ResultExt<T> {
    /// Wraps the error with `ctx` via [`with_context`].
    fn context(self, ctx: impl Into<String>) -> Result<T, BoxError>;

    /// Like [`ResultExt::context`], but the context string is only built on
    /// the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, BoxError>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn context(self, ctx: impl Into<String>) -> Result<T, BoxError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(with_context(err.into(), ctx)),
        }
    }

    fn with_context<C, F>(self, f: F) -> Result<T, BoxError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(with_context(err.into(), f())),
        }
    }
}
