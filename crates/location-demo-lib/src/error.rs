use thiserror::Error;

/// Convenient result alias for place index operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure talking to the place index.
///
/// Errors are never classified by cause; the HTTP layer reports all of them
/// the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// The external call failed (bad input, missing credentials, throttling, ...).
    #[error("{operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },

    /// The external call succeeded but the response lacked a required member.
    #[error("{operation} response did not include {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}

impl Error {
    /// Name of the external operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Service { operation, .. } | Self::MissingField { operation, .. } => operation,
        }
    }
}
