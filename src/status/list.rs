use axum::{Json, debug_handler, extract::State};

use crate::{AppResult, AppState};

use super::{StatusCheck, StatusService};

#[debug_handler(state = AppState)]
pub(crate) async fn list_status_checks(
    State(service): State<StatusService>,
) -> AppResult<Json<Vec<StatusCheck>>> {
    Ok(Json(service.list().await?))
}
