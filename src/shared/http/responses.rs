use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailResponse {
    pub detail: String,
}

pub fn message(text: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: text.into(),
        }),
    )
        .into_response()
}

pub fn detail(status: StatusCode, text: impl Into<String>) -> Response {
    (
        status,
        Json(DetailResponse {
            detail: text.into(),
        }),
    )
        .into_response()
}
