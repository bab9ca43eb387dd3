use crate::{
    Config,
    email::EmailProviderConfig,
    page::{HOME_TEMPLATE, SiteContent},
};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum StartupCheckError {
    #[error("Templates directory does not exist: {0}")]
    TemplatesDirectoryMissing(String),

    #[error("Required template missing: {0}")]
    TemplateMissing(String),

    #[error("Static files directory does not exist")]
    StaticDirectoryMissing,

    #[error("Site content is invalid: {0}")]
    InvalidContent(String),

    #[error("No contact recipients configured")]
    NoContactRecipients,
}

impl StartupCheckError {
    /// Critical failures stop the server; the rest only degrade it.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            StartupCheckError::TemplatesDirectoryMissing(_)
                | StartupCheckError::TemplateMissing(_)
                | StartupCheckError::InvalidContent(_)
        )
    }
}

pub async fn perform_startup_checks(config: &Config) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    let templates_dir = &config.templates.directory;
    if !templates_dir.exists() {
        error!("Templates directory does not exist: {:?}", templates_dir);
        errors.push(StartupCheckError::TemplatesDirectoryMissing(
            templates_dir.display().to_string(),
        ));
    } else {
        info!("Templates directory exists: {:?}", templates_dir);
        if !templates_dir.join(HOME_TEMPLATE).is_file() {
            error!("Landing page template missing: {}", HOME_TEMPLATE);
            errors.push(StartupCheckError::TemplateMissing(HOME_TEMPLATE.to_string()));
        }
    }

    let static_dir = &config.static_files.directory;
    if !static_dir.exists() {
        warn!("Static files directory does not exist: {:?}", static_dir);
        errors.push(StartupCheckError::StaticDirectoryMissing);
    } else {
        info!("Static files directory exists: {:?}", static_dir);
    }

    if let Err(e) = SiteContent::load(config.content.file.as_deref()).await {
        error!("Site content failed to load: {}", e);
        errors.push(StartupCheckError::InvalidContent(e.to_string()));
    }

    if config.contact.recipients.is_empty() {
        warn!("Contact submissions have no recipients and will fail");
        errors.push(StartupCheckError::NoContactRecipients);
    }

    match &config.email {
        Some(email) if !matches!(email.provider, EmailProviderConfig::Null) => {
            info!("Contact submissions are sent by e-mail from {}", email.from_address);
        }
        _ => warn!("Null e-mail provider in use; contact submissions are only logged"),
    }

    if errors.is_empty() {
        info!("All startup checks passed");
        Ok(())
    } else {
        error!("Startup checks failed with {} errors", errors.len());
        Err(errors)
    }
}
