use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("Unknown media item: {0}")]
    UnknownItem(String),
}
