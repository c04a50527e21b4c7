pub mod appresult;
pub mod config;
pub mod portal;
pub mod status;
pub mod store;

use std::any::Any;

use axum::{
    Json, Router,
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, normalize_path::NormalizePath,
    trace::TraceLayer,
};

pub use appresult::{AppError, AppResult, ErrorBody};
pub use config::Config;

use status::StatusService;
use store::StatusStore;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub status: StatusService,
}

impl AppState {
    pub fn new(store: StatusStore) -> Self {
        Self {
            status: StatusService::new(store),
        }
    }
}

/// The whole HTTP surface: everything lives under `/api`, anything else is a
/// JSON 404, and a panicking handler still answers with a JSON 500.
///
/// Trailing slashes are trimmed before routing, so `/api/status/` is `/api/status`.
pub fn app(app_state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let api = Router::new()
        .merge(portal::router())
        .merge(status::router())
        .method_not_allowed_fallback(not_found);

    let router = Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    NormalizePath::trim_trailing_slash(router)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Something went wrong!")),
    )
        .into_response()
}
