use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rejected before touching any state, so retrying with fixed input is safe.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
