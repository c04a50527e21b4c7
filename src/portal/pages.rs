use axum::{Json, debug_handler};
use serde::Serialize;

use super::{
    data::{self, LeaderboardEntry, UserProfile},
    rewards::{self, RewardProgress},
};

#[derive(Debug, Serialize)]
pub(crate) struct Greeting {
    message: &'static str,
}

#[debug_handler]
pub(crate) async fn hello() -> Json<Greeting> {
    tracing::info!("api root endpoint hit");
    Json(Greeting { message: "Hello World" })
}

#[debug_handler]
pub(crate) async fn user() -> Json<&'static UserProfile> {
    let user = data::current_user();
    tracing::info!(?user, "user endpoint hit");
    Json(user)
}

#[debug_handler]
pub(crate) async fn user_rewards() -> Json<Vec<RewardProgress>> {
    tracing::info!("user rewards endpoint hit");
    Json(rewards::progress(data::current_user().donations))
}

#[debug_handler]
pub(crate) async fn leaderboard() -> Json<&'static [LeaderboardEntry]> {
    tracing::info!(entries = data::leaderboard().len(), "leaderboard endpoint hit");
    Json(data::leaderboard())
}
