use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    admin::{
        create_game, create_match_day, create_season, create_team, grade_match_day, record_game_score,
        set_subscription,
    },
    leaderboard::get_leaderboard,
    predictions::{get_current_match_day, get_profile, get_teams, post_prediction, upsert_profile},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/teams", get(get_teams))
        .route("/api/profiles", post(upsert_profile))
        .route("/api/profiles/:id", get(get_profile))
        .route("/api/match-days/current", get(get_current_match_day))
        .route("/api/predictions", post(post_prediction))
        .route("/api/admin/teams", post(create_team))
        .route("/api/admin/seasons", post(create_season))
        .route("/api/admin/match-days", post(create_match_day))
        .route("/api/admin/match-days/:id/grade", post(grade_match_day))
        .route("/api/admin/games", post(create_game))
        .route("/api/admin/games/:id/score", post(record_game_score))
        .route("/api/admin/profiles/:id/subscription", post(set_subscription))
        .with_state(state)
}
