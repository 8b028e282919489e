use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced when building a custom [`BracketPairTable`](crate::BracketPairTable).
pub enum BracketTableError {
    #[error("bracket table is empty")]
    /// No bracket pairs were given.
    Empty,

    #[error("{openers} opening brackets but {closers} closing brackets")]
    /// Openers and closers are index-paired and must have the same length.
    LengthMismatch {
        /// Number of opening brackets.
        openers: usize,
        /// Number of closing brackets.
        closers: usize,
    },

    #[error("bracket character {0:?} appears more than once")]
    /// A character was listed twice (in either sequence).
    DuplicateCharacter(char),

    #[error("{0:?} drives lexical state and cannot be used as a bracket")]
    /// Quotes, escapes, comment markers, the verbatim prefix and line breaks are reserved.
    ReservedCharacter(char),
}
