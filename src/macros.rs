/// Constructs a fresh [`ContextError`](crate::ContextError) from a format
/// string, as [`ContextError::new`](crate::ContextError::new) over
/// [`format!`].
///
/// ```
/// let err = errctx::errctx!("could not open {}", "config.yaml");
/// assert_eq!(err.to_string(), "could not open config.yaml");
/// ```
#[macro_export]
macro_rules! errctx {
    ($($arg:tt)*) => {
        $crate::ContextError::new(::std::format!($($arg)*))
    };
}

/// [`with_context`](crate::with_context) with a format string for the
/// context.
///
/// ```
/// use errctx::BoxError;
///
/// let root: BoxError = Box::new(std::io::Error::new(
///     std::io::ErrorKind::NotFound,
///     "missing",
/// ));
/// let err = errctx::with_context!(root, "attempt {}", 2);
/// assert_eq!(err.to_string(), "attempt 2: missing");
/// ```
#[macro_export]
macro_rules! with_context {
    ($err:expr, $($arg:tt)*) => {
        $crate::with_context($err, ::std::format!($($arg)*))
    };
}
