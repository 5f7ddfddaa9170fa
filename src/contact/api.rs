use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::{
    mailer::{Email, Mailer},
    ContactForm, Field, CONTACT_ENDPOINT,
};
use crate::config::ContactConfig;

/// JSON body returned by `POST /api/contact`. Exactly one of `message` or
/// `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<Field, String>,
}

impl ContactResponse {
    fn sent() -> Self {
        Self {
            message: Some("Email sent successfully".to_string()),
            ..Default::default()
        }
    }

    fn error(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}

pub struct ContactState<M> {
    mailer: Arc<M>,
    config: Arc<ContactConfig>,
}

impl<M> Clone for ContactState<M> {
    fn clone(&self) -> Self {
        Self {
            mailer: Arc::clone(&self.mailer),
            config: Arc::clone(&self.config),
        }
    }
}

impl<M: Mailer> ContactState<M> {
    pub fn new(mailer: Arc<M>, config: ContactConfig) -> Self {
        Self {
            mailer,
            config: Arc::new(config),
        }
    }
}

/// Routes for the contact endpoint, ready to merge into the site router.
pub fn router<S, M>(state: ContactState<M>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    M: Mailer,
{
    Router::new()
        .route(CONTACT_ENDPOINT, post(submit::<M>))
        .with_state(state)
}

pub async fn submit<M: Mailer>(
    State(state): State<ContactState<M>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::warn!(%rejection, "rejected contact request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::error("Invalid request body")),
            );
        }
    };

    let errors = form.validate();
    if !errors.is_empty() {
        tracing::info!(?errors, "contact submission failed validation");
        let mut response = ContactResponse::error("Invalid contact details");
        response.fields = errors.messages();
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(response));
    }

    let email = Email::from_submission(&form, &state.config.sender, &state.config.recipient);
    match state.mailer.send(&email).await {
        Ok(()) => {
            tracing::info!(subject = %email.subject, "contact email sent");
            (StatusCode::OK, Json(ContactResponse::sent()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error sending email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::error("Failed to send email")),
            )
        }
    }
}
