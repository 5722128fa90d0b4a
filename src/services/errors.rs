use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The caller is not authenticated as the owner of the data.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A request field was missing or malformed.
    #[error("{0}")]
    InvalidInput(String),
    /// The store could not be queried; the whole operation is aborted rather
    /// than returning a partial result.
    #[error("temporarily unavailable")]
    Unavailable,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
