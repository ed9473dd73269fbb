use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream responded with {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Maps a non-2xx answer of the data store to an error, keeping its body verbatim.
    pub fn from_upstream(status: u16, body: String) -> Self {
        match status {
            409 => StorageError::ConstraintViolation(body),
            _ => StorageError::Upstream { status, body },
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StorageError::ConstraintViolation(body) if body.contains("23505"))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, StorageError::ConstraintViolation(body) if body.contains("23503"))
    }
}
