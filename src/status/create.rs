use axum::{
    Json, debug_handler,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{AppResult, AppState};

use super::{StatusCheck, StatusService};

#[derive(Debug, Deserialize)]
pub(crate) struct NewStatusCheck {
    client_name: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_status_check(
    State(service): State<StatusService>,
    body: Result<Json<NewStatusCheck>, JsonRejection>,
) -> AppResult<(StatusCode, Json<StatusCheck>)> {
    let Json(NewStatusCheck { client_name }) = body?;

    let record = service.create(client_name).await?;
    tracing::debug!(id = %record.id, client_name = %record.client_name, "status check created");

    Ok((StatusCode::CREATED, Json(record)))
}
