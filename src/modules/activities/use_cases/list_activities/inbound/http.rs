use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http::INTERNAL_ERROR;
use crate::shared::http::responses::detail;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.list_all().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list activities");
            detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}
