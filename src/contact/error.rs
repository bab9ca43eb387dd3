use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Пожалуйста, введите ваше имя")]
    MissingName,

    #[error("Пожалуйста, введите ваш телефон")]
    MissingPhone,

    #[error("Пожалуйста, введите ваш email")]
    MissingEmail,

    #[error("Пожалуйста, введите корректный email")]
    InvalidEmail,
}

/// Failure reported by the submission backend. The message is shown to the
/// visitor as is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmitError {
    pub message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<crate::email::EmailError> for SubmitError {
    fn from(err: crate::email::EmailError) -> Self {
        Self::new(err.to_string())
    }
}
