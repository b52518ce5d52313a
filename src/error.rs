use thiserror::Error;

/// Errors surfaced while parsing or sending an outgoing request.
#[derive(Debug, Error)]
pub enum Error {
    /// Draining a body into memory failed at the I/O layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    /// The service refused to accept a request.
    #[error("Service not ready: {0}")]
    NotReady(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
