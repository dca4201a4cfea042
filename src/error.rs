use thiserror::Error;

/// Errors produced when constructing a sampler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction parameter is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type for sampler operations
pub type Result<T> = std::result::Result<T, Error>;
