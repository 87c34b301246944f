use crate::domain::contact::ports::ContactServiceError;

use actix_web::HttpResponse;
use actix_web::{http::StatusCode, ResponseError};
use serde_json::json;

/// Every failure the API reports maps to a 500 with a JSON body carrying the
/// operation's fixed `message` and a descriptive `error` line.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Internal Server Error")]
    SubmitFailed(#[source] ContactServiceError),
    #[error("Failed to fetch data")]
    ListFailed(#[source] ContactServiceError),
}

impl AppError {
    fn cause(&self) -> &ContactServiceError {
        match self {
            AppError::SubmitFailed(error) | AppError::ListFailed(error) => error,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string(),
            "error": describe_chain(self.cause()),
        }))
    }
}

/// Flattens an error and its sources into one line for the response body.
fn describe_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}
