use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sesv2::{
    Client,
    config::{Credentials, Region},
    types::{Body, Content, Destination, EmailContent, Message},
};
use tracing::{debug, error};

use crate::email::{EmailBody, EmailError, EmailMessage, EmailProvider, SesConfig};

pub struct SesProvider {
    client: Client,
}

impl SesProvider {
    pub async fn new(config: &SesConfig) -> Result<Self, EmailError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        // Explicit keys win; otherwise the default credential chain applies.
        match (&config.access_key_id, &config.secret_access_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials =
                    Credentials::new(access_key, secret_key, None, None, "dvakadra-contact");
                loader = loader.credentials_provider(credentials);
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(EmailError::ConfigError(
                    "SES access_key_id and secret_access_key must be set together".to_string(),
                ));
            }
            (None, None) => {}
        }

        let sdk_config = loader.load().await;
        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }
}

fn utf8(data: &str) -> Result<Content, EmailError> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| EmailError::ProviderError(e.to_string()))
}

fn ses_body(body: &EmailBody) -> Result<Body, EmailError> {
    let builder = match body {
        EmailBody::Text(text) => Body::builder().text(utf8(text)?),
        EmailBody::Html(html) => Body::builder().html(utf8(html)?),
        EmailBody::Both { text, html } => Body::builder().text(utf8(text)?).html(utf8(html)?),
    };
    Ok(builder.build())
}

#[async_trait]
impl EmailProvider for SesProvider {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        debug!("Sending email via SES to: {:?}", message.to);

        let destination = Destination::builder()
            .set_to_addresses(Some(message.to.clone()))
            .build();

        let content = EmailContent::builder()
            .simple(
                Message::builder()
                    .subject(utf8(&message.subject)?)
                    .body(ses_body(&message.body)?)
                    .build(),
            )
            .build();

        let mut request = self
            .client
            .send_email()
            .from_email_address(&message.from)
            .destination(destination)
            .content(content);

        if let Some(reply_to) = &message.reply_to {
            request = request.reply_to_addresses(reply_to);
        }

        let output = request.send().await.map_err(|e| {
            error!("Failed to send email via SES: {}", e);
            EmailError::AwsError(e.to_string())
        })?;

        debug!("Email accepted by SES, message id {:?}", output.message_id());
        Ok(())
    }

    fn name(&self) -> &str {
        "ses"
    }
}
