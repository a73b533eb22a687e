use thiserror::Error;

/// Argument errors reported before any enumeration work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplacementError {
    #[error("Tuple length must be at least 1, got {0}")]
    InvalidLength(usize),
    #[error("Alphabet cannot be empty")]
    EmptyAlphabet,
}
