use thiserror::Error;

use crate::mgroup::MGroupKind;

/// Errors that can occur while parsing or accessing measurement groups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MGroupError {
    /// The specification does not match the grammar of the requested group kind.
    ///
    /// Raised by the individual recognizers. The dispatcher in
    /// [`parse_mgroup`](crate::mgroup::parse_mgroup) consumes it to try the
    /// next grammar, so callers of the dispatcher never observe it.
    #[error("Specification '{spec}' does not match the {kind} grammar")]
    GrammarMismatch { kind: MGroupKind, spec: String },

    /// The specification has the shape of a grammar, but a weight or position
    /// in it does not fit `u32`
    #[error("Number {number} in specification '{spec}' exceeds the largest weight or position")]
    NumberTooLarge { spec: String, number: String },

    /// A positional accessor was given an index outside `[0, len)`
    #[error("Index {index} is out of range for a group of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// No entry matches the semantic key, or the key does not fit the group kind
    #[error("No entry found for key {0}")]
    KeyNotFound(String),
}

impl MGroupError {
    pub(crate) fn mismatch(kind: MGroupKind, spec: &str) -> Self {
        MGroupError::GrammarMismatch {
            kind,
            spec: spec.to_string(),
        }
    }
}
