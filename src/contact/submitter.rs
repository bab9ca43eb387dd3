use super::{ContactSubmission, SubmitError};
use crate::email::{DynEmailProvider, EmailConfig, EmailMessage};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// The backend that receives a validated contact submission.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

pub type DynContactSubmitter = Arc<dyn ContactSubmitter>;

/// Forwards submissions to the studio's inbox.
pub struct EmailContactSubmitter {
    provider: DynEmailProvider,
    from: String,
    recipients: Vec<String>,
    subject: String,
}

impl EmailContactSubmitter {
    pub fn new(
        provider: DynEmailProvider,
        email_config: &EmailConfig,
        recipients: Vec<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            from: email_config.format_from(),
            recipients,
            subject: subject.into(),
        }
    }

    pub fn build_message(&self, submission: &ContactSubmission) -> EmailMessage {
        let message = if submission.message.trim().is_empty() {
            "(не указано)"
        } else {
            submission.message.as_str()
        };

        let text = format!(
            "Новая заявка с сайта\n\n\
             Имя: {}\n\
             Телефон: {}\n\
             Email: {}\n\n\
             Сообщение:\n{}",
            submission.name, submission.phone, submission.email, message
        );

        let html = format!(
            r#"<html>
<body>
    <h2>Новая заявка с сайта</h2>
    <p><strong>Имя:</strong> {}</p>
    <p><strong>Телефон:</strong> {}</p>
    <p><strong>Email:</strong> {}</p>
    <p><strong>Сообщение:</strong></p>
    <p>{}</p>
</body>
</html>"#,
            crate::seo::escape_html(&submission.name),
            crate::seo::escape_html(&submission.phone),
            crate::seo::escape_html(&submission.email),
            crate::seo::escape_html(message).replace('\n', "<br>")
        );

        EmailMessage {
            to: self.recipients.clone(),
            from: self.from.clone(),
            subject: self.subject.clone(),
            body: crate::email::EmailBody::Both { text, html },
            reply_to: Some(submission.email.clone()),
        }
    }
}

#[async_trait]
impl ContactSubmitter for EmailContactSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let submission_id = Uuid::new_v4();
        if self.recipients.is_empty() {
            error!(%submission_id, "No contact recipients configured");
            return Err(SubmitError::new("получатель заявок не настроен"));
        }

        info!(
            %submission_id,
            provider = self.provider.name(),
            recipients = self.recipients.len(),
            "Forwarding contact submission"
        );

        let message = self.build_message(submission);
        self.provider.send_email(message).await.map_err(|e| {
            error!(%submission_id, "Failed to forward contact submission: {}", e);
            SubmitError::from(e)
        })?;

        info!(%submission_id, "Contact submission forwarded");
        Ok(())
    }
}
