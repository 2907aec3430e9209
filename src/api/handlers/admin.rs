use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{
    CreateGameRequest, CreateMatchDayRequest, CreateSeasonRequest, CreateTeamRequest, GameScoreRequest,
    GradeRequest, SubscriptionRequest,
};
use crate::database;
use crate::errors::GradingError;
use crate::services::grading::GradingService;
use super::{internal_error, AppState};

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateTeamRequest>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let name = request.name.trim();
    if name.is_empty() {
        return (StatusCode::BAD_REQUEST, "Team needs a name").into_response();
    }

    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::teams::find_by_name(&conn, name) {
        Ok(Some(_)) => return (StatusCode::CONFLICT, "Team already exists").into_response(),
        Ok(None) => {}
        Err(e) => return internal_error("Team Error", e),
    }

    match database::teams::insert_team(&conn, name) {
        Ok(team) => {
            log::info!("Team {} ({}) created", team.name, team.id);
            (StatusCode::CREATED, Json(team)).into_response()
        }
        Err(e) => internal_error("Team Error", e),
    }
}

pub async fn create_season(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateSeasonRequest>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if request.name.trim().is_empty() || request.end_date < request.start_date {
        return (StatusCode::BAD_REQUEST, "Season needs a name and an end date after its start").into_response();
    }

    let mut conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::seasons::create_active_season(&mut conn, &request.name, request.start_date, request.end_date) {
        Ok(season) => {
            log::info!("Season {} ({}) created and activated", season.name, season.id);
            (StatusCode::CREATED, Json(season)).into_response()
        }
        Err(e) => internal_error("Season Error", e),
    }
}

pub async fn create_match_day(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateMatchDayRequest>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::seasons::find_by_id(&conn, request.season_id) {
        Ok(Some(_)) => {}
        Ok(None) => return (StatusCode::NOT_FOUND, "Season not found").into_response(),
        Err(e) => return internal_error("Season Error", e),
    }

    match database::match_days::insert_match_day(&conn, request.season_id, request.match_date, request.cutoff_at) {
        Ok(match_day) => (StatusCode::CREATED, Json(match_day)).into_response(),
        Err(e) => internal_error("Match Day Error", e),
    }
}

pub async fn create_game(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateGameRequest>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::match_days::find_by_id(&conn, request.match_day_id) {
        Ok(Some(_)) => {}
        Ok(None) => return (StatusCode::NOT_FOUND, "Match day not found").into_response(),
        Err(e) => return internal_error("Match Day Error", e),
    }

    let result = database::games::insert_game(
        &conn,
        request.match_day_id,
        &request.home_team,
        &request.away_team,
        request.kickoff_at,
        request.is_selected,
    );

    match result {
        Ok(game) => (StatusCode::CREATED, Json(game)).into_response(),
        Err(e) => internal_error("Game Error", e),
    }
}

pub async fn record_game_score(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(game_id): Path<i64>,
    Json(request): Json<GameScoreRequest>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    let limit = database::games::MAX_GOALS_PER_SIDE;
    if request.home_goals > limit || request.away_goals > limit {
        return (StatusCode::BAD_REQUEST, format!("Goals per side must be at most {limit}")).into_response();
    }

    match database::games::record_score(&conn, game_id, request.home_goals, request.away_goals) {
        Ok(Some(game)) => Json(game).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Game not found").into_response(),
        Err(e) => internal_error("Game Error", e),
    }
}

pub async fn grade_match_day(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(match_day_id): Path<i64>,
    body: Option<Json<GradeRequest>>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let mut conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    let service = GradingService::new(state.config.scoring.clone());
    match service.grade_match_day(&mut conn, match_day_id, request.actual_total_goals) {
        Ok(summary) => Json(summary).into_response(),
        Err(GradingError::MatchDayNotFound(_)) => (StatusCode::NOT_FOUND, "Match day not found").into_response(),
        Err(GradingError::Storage(e)) => internal_error("Grading Error", e),
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    }
}

/// Stand-in for the payment provider's webhook.
pub async fn set_subscription(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(profile_id): Path<String>,
    Json(request): Json<SubscriptionRequest>,
) -> impl IntoResponse {
    if !state.is_admin(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::profiles::set_subscription_status(&conn, &profile_id, request.status) {
        Ok(Some(profile)) => {
            log::info!("Subscription for {} is now {}", profile.id, profile.subscription_status);
            Json(profile).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Profile not found").into_response(),
        Err(e) => internal_error("Subscription Error", e),
    }
}
