use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{LeaderboardParams, LeaderboardResponse};
use crate::services::leaderboard::{LeaderboardScope, LeaderboardService};
use super::{internal_error, AppState};

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> impl IntoResponse {
    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    let scope = match params.season_id {
        Some(id) => LeaderboardScope::Season(id),
        None => LeaderboardScope::Current,
    };

    let service = LeaderboardService::new(state.config.leaderboard.clone());
    match service.build(&conn, scope) {
        Ok(Some(leaderboard)) => Json(LeaderboardResponse::from(leaderboard)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Season not found").into_response(),
        Err(e) => internal_error("Leaderboard Error", e),
    }
}
