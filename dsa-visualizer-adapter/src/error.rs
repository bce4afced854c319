use alloc::string::String;
use thiserror::Error;

/// Errors from the fallible adapter entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input token was not an integer. Empty tokens count as invalid.
    #[error("Invalid input. Please enter comma-separated numbers. (could not parse {token:?})")]
    InvalidNumber { token: String },

    /// A name did not match any variant of the requested identifier kind.
    #[error("unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}
