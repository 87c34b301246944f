use crate::{
    domain::contact::{models::submission::ContactSubmission, ports::ContactService},
    inbound::http::{errors::AppError, state::SharedContactState},
};
use actix_web::{web, HttpResponse};
use serde_json::json;

#[tracing::instrument(
    name = "Receiving a contact request",
    skip(submission, state),
    fields(contact_email = tracing::field::Empty)
)]
pub async fn submit_contact_request<CS: ContactService>(
    submission: web::Json<ContactSubmission>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let submission = submission.into_inner();
    if let Some(email) = &submission.email {
        tracing::Span::current().record("contact_email", tracing::field::display(email));
    }

    let receipt = state
        .contact_service()
        .submit(submission)
        .await
        .map_err(AppError::SubmitFailed)?;

    let body = if receipt.notified {
        json!({
            "message": "Service request received and email sent successfully",
            "result": { "insertedId": receipt.id },
        })
    } else {
        json!({
            "message": "Saved to DB, but email failed",
            "result": { "insertedId": receipt.id },
            "emailError": true,
        })
    };

    Ok(HttpResponse::Ok().json(body))
}
