use thiserror::Error;

use crate::fec::Elem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FecError {
    #[error("matrix is singular: zero pivot at row {row}")]
    SingularMatrix { row: usize },
    #[error("invalid shape: expected {expected}, found {found}")]
    InvalidShape { expected: usize, found: usize },
    #[error("value {value} is not a field element")]
    OutOfField { value: Elem },
    #[error("failed to decode message after {attempts} attempts: {last}")]
    AttemptsExhausted {
        attempts: usize,
        last: Box<FecError>,
    },
    #[error("decoded message does not match the original")]
    DecodeMismatch,
    #[error("config error: {0}")]
    Config(String),
}

impl FecError {
    /// Whether a fresh coefficient matrix may succeed where this one failed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FecError::SingularMatrix { .. })
    }
}

impl From<toml::de::Error> for FecError {
    fn from(e: toml::de::Error) -> Self {
        FecError::Config(e.to_string())
    }
}

impl From<std::io::Error> for FecError {
    fn from(e: std::io::Error) -> Self {
        FecError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FecError>;
