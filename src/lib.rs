//! Attach ordered, human-readable context to an error as it propagates back
//! through a long call chain.
//!
//! Rendered messages have the form
//! `<third ctx>: <second ctx>: <first ctx>: <root message>`, where the
//! first context string added sits closest to the root. Context is attached with
//! [`with_context`] (or the [`with_context!`] macro for format strings),
//! and the original cause stays reachable through [`root`] no matter how
//! many layers were added on the way up.
//!
//! ```
//! use errctx::{BoxError, ContextError, ResultExt};
//!
//! fn do_x() -> Result<(), BoxError> {
//!     Err(ContextError::new("could not do X: bad stuff happened").into())
//! }
//!
//! fn do_y() -> Result<(), BoxError> {
//!     do_x().context("could not do Y")
//! }
//!
//! let err = do_y().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "could not do Y: could not do X: bad stuff happened",
//! );
//! ```

use std::error::Error as StdError;

mod error;
pub mod ext;
mod macros;

pub use error::{BoxError, ContextError};
pub use ext::ResultExt;

/// Adds the context string `ctx` to `err`.
///
/// If `err` already carries context, `ctx` is appended to it and the same
/// allocation is handed back: the return value is an alias of the input,
/// not a copy. Otherwise `err` becomes the root of a fresh [`ContextError`]
/// whose only context string is `ctx`; the root itself is kept unmodified.
pub fn with_context(err: BoxError, ctx: impl Into<String>) -> Box<ContextError> {
    match err.downcast::<ContextError>() {
        Ok(mut carried) => {
            carried.add_context(ctx);
            carried
        }
        Err(other) => Box::new(ContextError::wrap(other, ctx.into())),
    }
}

/// Returns the root cause of `err`: the stored root if `err` carries
/// context, `err` itself otherwise.
///
/// Only one level is unwrapped. The result can be inspected with
/// `downcast_ref` to branch on the original error type without caring how
/// many context layers were added above it.
pub fn root<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    if let Some(carried) = err.downcast_ref::<ContextError>() {
        return carried.root();
    }
    err
}
