use thiserror::Error;

use crate::content::PROFILE;

pub const MAIL_API_URL_VAR: &str = "CONTACT_MAIL_API_URL";
pub const MAIL_API_KEY_VAR: &str = "CONTACT_MAIL_API_KEY";
pub const EMAIL_FROM_VAR: &str = "CONTACT_EMAIL_FROM";
pub const EMAIL_TO_VAR: &str = "CONTACT_EMAIL_TO";

const LOG_SENDER: &str = "portfolio@localhost";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when {url} is set", url = MAIL_API_URL_VAR)]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailTransport {
    Http { endpoint: String, api_key: String },
    Log,
}

/// Where contact submissions go and how they get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub sender: String,
    pub recipient: String,
    pub transport: MailTransport,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let recipient = get(EMAIL_TO_VAR).unwrap_or_else(|| PROFILE.email.to_string());

        let Some(endpoint) = get(MAIL_API_URL_VAR) else {
            return Ok(Self {
                sender: get(EMAIL_FROM_VAR).unwrap_or_else(|| LOG_SENDER.to_string()),
                recipient,
                transport: MailTransport::Log,
            });
        };
        let api_key = get(MAIL_API_KEY_VAR).ok_or(ConfigError::Missing(MAIL_API_KEY_VAR))?;
        let sender = get(EMAIL_FROM_VAR).ok_or(ConfigError::Missing(EMAIL_FROM_VAR))?;

        Ok(Self {
            sender,
            recipient,
            transport: MailTransport::Http { endpoint, api_key },
        })
    }
}
