use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::Field;

pub const NAME_MIN_LENGTH: usize = 2;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 500;

/// The whitespace set browsers use for `\s`. Unicode `\s` in the regex
/// crate differs: it includes U+0085 and excludes U+FEFF.
const BROWSER_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{BROWSER_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least {min} characters long", min = NAME_MIN_LENGTH)]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {min} characters long", min = MESSAGE_MIN_LENGTH)]
    MessageTooShort,
    #[error("Message must be less than {max} characters", max = MESSAGE_MAX_LENGTH)]
    MessageTooLong,
}

/// Lengths are counted in characters, not bytes.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => {
            if value.chars().count() < NAME_MIN_LENGTH {
                return Err(ValidationError::NameTooShort);
            }
        }
        Field::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        Field::Message => {
            let len = value.chars().count();
            if len < MESSAGE_MIN_LENGTH {
                return Err(ValidationError::MessageTooShort);
            }
            if len > MESSAGE_MAX_LENGTH {
                return Err(ValidationError::MessageTooLong);
            }
        }
    }
    Ok(())
}

/// Per-field validation results, `None` meaning the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Message => self.message = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Messages for the failing fields only.
    pub fn messages(&self) -> BTreeMap<Field, String> {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|e| (f, e.to_string())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_minimum() {
        for name in ["", "J", "é"] {
            let err = validate_field(Field::Name, name).unwrap_err();
            assert_eq!(err.to_string(), "Name must be at least 2 characters long");
        }
        assert!(validate_field(Field::Name, "Jo").is_ok());
        // two characters, four bytes
        assert!(validate_field(Field::Name, "éé").is_ok());
    }

    #[test]
    fn test_email_pattern() {
        for bad in [
            "",
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane doe@example.com",
            "jane@exa mple.com",
            "jane@@example.com",
            "jane@example.",
        ] {
            assert_eq!(
                validate_field(Field::Email, bad),
                Err(ValidationError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }
        for good in ["jane@example.com", "a@b.c", "first.last+tag@mail.example.org"] {
            assert!(validate_field(Field::Email, good).is_ok(), "{good:?}");
        }
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_email_whitespace_matches_browsers() {
        for ws in ['\t', '\u{0B}', '\u{A0}', '\u{2003}', '\u{3000}', '\u{FEFF}'] {
            let email = format!("a{ws}b@x.co");
            assert_eq!(
                validate_field(Field::Email, &email),
                Err(ValidationError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
        // not whitespace to a browser
        for other in ['\u{85}', '\u{180E}', '\u{200B}'] {
            let email = format!("a{other}b@x.co");
            assert!(validate_field(Field::Email, &email).is_ok(), "{email:?}");
        }
    }

    #[test]
    fn test_message_bounds_are_inclusive() {
        let at = |n: usize| "x".repeat(n);
        assert_eq!(
            validate_field(Field::Message, &at(9)),
            Err(ValidationError::MessageTooShort)
        );
        assert!(validate_field(Field::Message, &at(10)).is_ok());
        assert!(validate_field(Field::Message, &at(500)).is_ok());
        assert_eq!(
            validate_field(Field::Message, &at(501)),
            Err(ValidationError::MessageTooLong)
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );
        assert_eq!(
            ValidationError::MessageTooLong.to_string(),
            "Message must be less than 500 characters"
        );
    }

    #[test]
    fn test_messages_cover_only_failures() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());
        assert!(errors.messages().is_empty());

        errors.set(Field::Email, Some(ValidationError::InvalidEmail));
        assert!(!errors.is_empty());
        let messages = errors.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages.get(&Field::Email).map(String::as_str),
            Some("Please enter a valid email address")
        );
    }
}
