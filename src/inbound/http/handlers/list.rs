use crate::{
    domain::contact::ports::ContactService,
    inbound::http::{errors::AppError, state::SharedContactState},
};
use actix_web::{web, HttpResponse};

#[tracing::instrument(name = "Fetching all contact requests", skip(state))]
pub async fn list_contact_requests<CS: ContactService>(
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let records = state
        .contact_service()
        .list()
        .await
        .map_err(AppError::ListFailed)?;

    Ok(HttpResponse::Ok().json(records))
}
