use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefereeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// The completion provider could not be reached or rejected the request.
    #[error("upstream model error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type RefereeResult<T> = Result<T, RefereeError>;
