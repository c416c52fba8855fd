use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;
