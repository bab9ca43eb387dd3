use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub from_address: String,
    pub from_name: Option<String>,
    #[serde(flatten)]
    pub provider: EmailProviderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum EmailProviderConfig {
    Ses(SesConfig),
    /// Logs messages instead of sending them.
    Null,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SesConfig {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl EmailConfig {
    pub fn format_from(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_address),
            None => self.from_address.clone(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_address: "noreply@localhost".to_string(),
            from_name: None,
            provider: EmailProviderConfig::Null,
        }
    }
}
