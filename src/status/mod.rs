mod create;
mod list;
mod record;
mod service;

use axum::{Router, routing::get};

use crate::AppState;

pub use record::{ClientName, StatusCheck};
pub use service::{LIST_LIMIT, StatusService};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(list::list_status_checks).post(create::create_status_check))
}
