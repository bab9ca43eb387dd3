use crate::{email::EmailError, page::ContentError, templating::TemplateError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Email provider error: {0}")]
    Email(#[from] EmailError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Page globals error: {0}")]
    Globals(#[from] liquid::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
