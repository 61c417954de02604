use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed error trait object accepted and produced throughout this crate.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

const JOIN: &str = ":";

// Root error backing `ContextError::new`: just a message.
#[derive(Debug, Error)]
#[error("{0}")]
struct Message(String);

/// An error that carries an ordered list of context strings on top of a
/// root cause.
///
/// Context strings are stored exactly as given (untrimmed) and only
/// whitespace-trimmed when the message is rendered. The root is set at
/// construction and never replaced; context is append-only.
///
/// There is no internal synchronization. Appending requires `&mut self`,
/// so sharing one instance across concurrent propagation branches means
/// synchronizing externally, same as any other mutable value.
#[derive(Debug)]
pub struct ContextError {
    root: BoxError,
    context: Vec<String>,
}

impl ContextError {
    /// Constructs an error with no context and a root whose message is
    /// exactly `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            root: Box::new(Message(text.into())),
            context: Vec::new(),
        }
    }

    pub(crate) fn wrap(root: BoxError, ctx: String) -> Self {
        Self {
            root,
            context: vec![ctx],
        }
    }

    /// The root error all context strings are prepended to.
    pub fn root(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.root
    }

    /// Appends a context string. The first string added sits closest to the
    /// root in the rendered message; later ones sit further left.
    pub fn add_context(&mut self, ctx: impl Into<String>) {
        self.context.push(ctx.into());
    }
}

impl fmt::Display for ContextError {
    /// Renders newest context first, walking back to the oldest, with the
    /// root message last: `"C3: C2: C1: root"`. A fragment that already
    /// ends in `:` after trimming is followed by a single space only, so
    /// caller-supplied trailing colons never double up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev: Option<&str> = None;
        for ctx in self.context.iter().rev() {
            let part = ctx.trim();
            if let Some(last) = prev {
                write_joined(f, last)?;
            }
            f.write_str(part)?;
            prev = Some(part);
        }
        // With no context at all this degenerates to the root message alone.
        if let Some(last) = prev {
            write_joined(f, last)?;
        }
        write!(f, "{}", self.root)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, last: &str) -> fmt::Result {
    if !last.ends_with(JOIN) {
        f.write_str(JOIN)?;
    }
    f.write_str(" ")
}

impl StdError for ContextError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.root)
    }
}
