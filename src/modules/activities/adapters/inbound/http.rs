// HTTP plumbing shared by the activity endpoints.

use axum::{
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::application::errors::ApplicationError;
use crate::shared::http::responses::detail;

pub const EMAIL_REQUIRED: &str = "Query parameter `email` is required";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// The `email` query parameter, or a 422 when it is missing or empty.
pub fn required_email(
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<String, Response> {
    match params {
        Ok(Query(p)) if !p.email.is_empty() => Ok(p.email),
        _ => Err(detail(StatusCode::UNPROCESSABLE_ENTITY, EMAIL_REQUIRED)),
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::NotFound(_) => detail(StatusCode::NOT_FOUND, "Activity not found"),
            ApplicationError::InvalidOperation(reason) => detail(StatusCode::BAD_REQUEST, reason),
            ApplicationError::Registry(e) => {
                tracing::error!(error = %e, "activity registry failed");
                detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        }
    }
}
