use gloo_net::http::Request;

use super::{ContactForm, SubmitError, CONTACT_ENDPOINT};

/// Send the form once. No retry: the user decides whether to try again.
pub async fn post_contact(form: &ContactForm) -> Result<(), SubmitError> {
    let response = Request::post(CONTACT_ENDPOINT)
        .json(form)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let outcome = SubmitError::from_status(response.status());
    if outcome.is_err() {
        log::warn!("contact endpoint responded with {}", response.status());
    }
    outcome
}
