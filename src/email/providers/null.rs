use crate::email::{EmailError, EmailMessage, EmailProvider};
use async_trait::async_trait;
use tracing::{debug, info};

const PREVIEW_CHARS: usize = 200;

/// Writes outgoing mail to the log. Used when no real provider is
/// configured, so contact submissions still show up somewhere.
#[derive(Debug, Default)]
pub struct NullProvider;

impl NullProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailProvider for NullProvider {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        if message.to.is_empty() {
            return Err(EmailError::ConfigError("message has no recipients".to_string()));
        }

        let source = message.body.preview_source();
        let preview: String = source.chars().take(PREVIEW_CHARS).collect();
        let truncated = source.chars().count() > PREVIEW_CHARS;

        info!(
            from = %message.from,
            to = %message.to.join(", "),
            reply_to = message.reply_to.as_deref().unwrap_or("(none)"),
            subject = %message.subject,
            "Null email provider, not sending: {}{}",
            preview,
            if truncated { "..." } else { "" }
        );
        debug!(body = ?message.body, "Null email provider, full body");

        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
