use super::{ContactFields, ContactForm, SubmitOutcome};
use crate::{AppState, page::PageQuery};
use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Plain HTML form post. Re-renders the landing page with the outcome and
/// whatever the form holds afterwards.
pub async fn contact_form_handler(
    State(app_state): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> impl IntoResponse {
    tracing::info!("Contact form post received");
    let mut form = ContactForm::with_fields(fields);
    form.submit(app_state.submitter.as_ref()).await;

    crate::page::render_home(&app_state, &PageQuery::default(), form.view()).await
}

pub async fn api_contact_handler(
    State(app_state): State<AppState>,
    Json(fields): Json<ContactFields>,
) -> impl IntoResponse {
    tracing::info!("Contact API submission received");
    let mut form = ContactForm::with_fields(fields);
    let outcome = form.submit(app_state.submitter.as_ref()).await;

    let message = form
        .notification()
        .map(|n| n.message.clone())
        .unwrap_or_default();

    let status = match outcome {
        SubmitOutcome::Sent => StatusCode::OK,
        SubmitOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        SubmitOutcome::Ignored => StatusCode::CONFLICT,
    };

    (
        status,
        Json(ContactResponse {
            success: status == StatusCode::OK,
            message,
        }),
    )
}
