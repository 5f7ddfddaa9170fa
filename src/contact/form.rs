use thiserror::Error;

use super::{validate_field, ContactForm, Field, FieldErrors};

pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Rejected { status: u16 },
}

impl SubmitError {
    /// Outcome of a response status: any 2xx is success, everything else is
    /// a rejection.
    pub fn from_status(status: u16) -> Result<(), SubmitError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SubmitError::Rejected { status })
        }
    }

    /// Text shown in the failure banner. Deliberately generic.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Network(_) => {
                "Unable to send message. Please check your connection and try again."
            }
            SubmitError::Rejected { .. } => "Something went wrong. Please try again later.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(SubmitError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: &'static str,
}

/// Everything the contact form shows: field values, per-field errors and
/// the outcome of the last submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(|e| e.to_string())
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn message_len(&self) -> usize {
        self.form.message.chars().count()
    }

    /// Keystroke handler: store the value and re-check just that field.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.errors.set(field, validate_field(field, &value).err());
        self.form.set(field, value);
    }

    /// Validate everything and, when the form is clean, move to
    /// `Submitting` and hand back the body to POST. Returns `None` when
    /// nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_submitting() {
            return None;
        }
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.form.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors = FieldErrors::default();
                self.status = SubmitStatus::Sent;
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(e);
            }
        }
    }

    pub fn banner(&self) -> Option<Banner> {
        match &self.status {
            SubmitStatus::Sent => Some(Banner {
                kind: BannerKind::Success,
                text: THANK_YOU,
            }),
            SubmitStatus::Failed(e) => Some(Banner {
                kind: BannerKind::Failure,
                text: e.user_message(),
            }),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}
