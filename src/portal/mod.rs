mod data;
mod pages;
mod rewards;

use axum::{Router, routing::get};

use crate::AppState;

pub use data::{LeaderboardEntry, UserProfile, current_user, leaderboard};
pub use rewards::{RewardProgress, progress};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::hello))
        .route("/user", get(pages::user))
        .route("/user/rewards", get(pages::user_rewards))
        .route("/leaderboard", get(pages::leaderboard))
}
