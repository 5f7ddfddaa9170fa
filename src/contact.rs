#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "hydrate")]
mod client;
mod dialog;
mod form;
#[cfg(feature = "ssr")]
pub mod mailer;
mod validate;

#[cfg(feature = "hydrate")]
pub use client::post_contact;
pub use dialog::ContactDialog;
pub use form::{Banner, BannerKind, ContactFormState, SubmitError, SubmitStatus, THANK_YOU};
pub use validate::{validate_field, FieldErrors, ValidationError, MESSAGE_MAX_LENGTH};

use serde::{Deserialize, Serialize};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Message => "Your message here...",
        }
    }
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, validate_field(field, self.get(field)).err());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I would like to connect.".to_string(),
        }
    }

    #[test]
    fn test_endpoint_path() {
        assert_eq!(CONTACT_ENDPOINT, "/api/contact");
    }

    #[test]
    fn test_body_is_exactly_the_three_fields() {
        let body = serde_json::to_value(jane()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello, I would like to connect.",
            })
        );
    }

    #[test]
    fn test_validate_collects_every_field() {
        assert!(jane().validate().is_empty());

        let form = ContactForm {
            name: "J".to_string(),
            email: "jane".to_string(),
            message: "hi".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.get(Field::Name), Some(ValidationError::NameTooShort));
        assert_eq!(errors.get(Field::Email), Some(ValidationError::InvalidEmail));
        assert_eq!(
            errors.get(Field::Message),
            Some(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_get_set_round_trip_per_field() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "a@b.co".to_string());
        assert_eq!(form.get(Field::Email), "a@b.co");
        assert_eq!(form.get(Field::Name), "");
    }
}
