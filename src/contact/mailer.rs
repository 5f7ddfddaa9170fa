use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use super::ContactForm;
use crate::config::{ContactConfig, MailTransport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

impl Email {
    pub fn from_submission(form: &ContactForm, sender: &str, recipient: &str) -> Self {
        Self {
            from: sender.to_string(),
            to: vec![recipient.to_string()],
            reply_to: form.email.clone(),
            subject: format!("New contact form submission from {}", form.name),
            text: format!(
                "Name: {}\nEmail: {}\nMessage: {}\n",
                form.name, form.email, form.message
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("mail transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail API rejected the message with status {0}")]
    Rejected(http::StatusCode),
}

/// Outbound email. Success or failure is all the contact endpoint cares
/// about.
pub trait Mailer: Send + Sync + 'static {
    fn send(&self, email: &Email) -> impl Future<Output = Result<(), MailError>> + Send;
}

/// Posts the email as JSON to a transactional-email HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(MailError::Rejected(status))
        }
    }
}

/// Development transport: the email only goes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        tracing::info!(
            to = ?email.to,
            reply_to = %email.reply_to,
            subject = %email.subject,
            "mail delivery disabled, logging contact submission\n{}",
            email.text
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum ConfiguredMailer {
    Http(HttpMailer),
    Log(LogMailer),
}

impl ConfiguredMailer {
    pub fn from_config(config: &ContactConfig) -> Self {
        match &config.transport {
            MailTransport::Http { endpoint, api_key } => {
                Self::Http(HttpMailer::new(endpoint.clone(), api_key.clone()))
            }
            MailTransport::Log => Self::Log(LogMailer),
        }
    }
}

impl Mailer for ConfiguredMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        match self {
            Self::Http(m) => m.send(email).await,
            Self::Log(m) => m.send(email).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_from_submission() {
        let form = ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I would like to connect.".to_string(),
        };
        let email = Email::from_submission(&form, "site@example.org", "owner@example.org");
        assert_eq!(email.subject, "New contact form submission from Jane Doe");
        assert_eq!(email.to, vec!["owner@example.org".to_string()]);
        assert_eq!(email.reply_to, "jane@example.com");
        assert_eq!(
            email.text,
            "Name: Jane Doe\nEmail: jane@example.com\nMessage: Hello, I would like to connect.\n"
        );
    }

    #[test]
    fn test_configured_mailer_follows_transport() {
        let config = ContactConfig::from_lookup(|_| None).unwrap();
        assert!(matches!(
            ConfiguredMailer::from_config(&config),
            ConfiguredMailer::Log(_)
        ));

        let config = ContactConfig::from_lookup(|key| match key {
            "CONTACT_MAIL_API_URL" => Some("https://mail.example.org/emails".to_string()),
            "CONTACT_MAIL_API_KEY" => Some("secret".to_string()),
            "CONTACT_EMAIL_FROM" => Some("site@example.org".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(matches!(
            ConfiguredMailer::from_config(&config),
            ConfiguredMailer::Http(_)
        ));
    }

    #[tokio::test]
    async fn test_log_mailer_always_succeeds() {
        let form = ContactForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Just saying hello!".to_string(),
        };
        let email = Email::from_submission(&form, "a@example.org", "b@example.org");
        assert!(LogMailer.send(&email).await.is_ok());
    }
}
