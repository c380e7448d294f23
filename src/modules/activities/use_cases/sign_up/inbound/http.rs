use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http::{EmailParams, required_email};
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shared::http::responses::message;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Response {
    let email = match required_email(params) {
        Ok(email) => email,
        Err(response) => return response,
    };

    let command = SignUp {
        activity_name: activity_name.clone(),
        email: email.clone(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(()) => message(format!("Signed up {email} for {activity_name}")),
        Err(e) => e.into_response(),
    }
}
