use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid artwork id: {0:?}")]
    InvalidArtworkId(String),
    #[error("invalid book id: {0:?}")]
    InvalidBookId(String),
    #[error("book {0} appears more than once in the canonical order")]
    DuplicateBook(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
