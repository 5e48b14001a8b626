use thiserror::Error;

use crate::forest::TreeKind;

/// Errors raised when routing user input to a tree.
///
/// The tree engine itself is infallible: removing an absent key is a no-op and
/// building from an empty key set yields an empty tree. These errors describe
/// requests rejected before, or instead of, reaching it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid key {0:?}")]
    InvalidKey(String),

    #[error("expected exactly one key, got {0}")]
    WrongKeyCount(usize),

    #[error("no keys given")]
    EmptyInput,

    #[error("key {0} does not exist")]
    KeyNotFound(String),

    #[error("{op} is not supported by the {kind} tree")]
    Unsupported { kind: TreeKind, op: &'static str },

    #[error("no tree selected, choose one with `mode avl` or `mode balanced`")]
    NoModeSelected,

    #[error("unknown command {0:?}, try `help`")]
    UnknownCommand(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
