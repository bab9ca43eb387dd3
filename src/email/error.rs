use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    ConfigError(String),

    #[error("Email provider error: {0}")]
    ProviderError(String),

    #[error("AWS SDK error: {0}")]
    AwsError(String),
}
