use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::models::{CurrentMatchDayParams, CurrentMatchDayResponse, PredictionRequest, ProfileRequest};
use crate::database;
use crate::errors::SubmissionError;
use crate::services::predictions::{current_match_day, submit_prediction};
use super::{internal_error, AppState};

pub async fn upsert_profile(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProfileRequest>,
) -> impl IntoResponse {
    if request.id.trim().is_empty() || request.display_name.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "id and displayName are required").into_response();
    }

    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    if let Some(team_id) = request.team_id {
        match database::teams::find_by_id(&conn, team_id) {
            Ok(Some(_)) => {}
            Ok(None) => return (StatusCode::NOT_FOUND, "Team not found").into_response(),
            Err(e) => return internal_error("Team Error", e),
        }
    }

    match database::profiles::upsert_profile(&conn, &request.id, &request.display_name, request.team_id) {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => internal_error("Profile Error", e),
    }
}

pub async fn get_profile(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> impl IntoResponse {
    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::profiles::find_by_id(&conn, &id) {
        Ok(Some(profile)) => Json(profile).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Profile not found").into_response(),
        Err(e) => internal_error("Profile Error", e),
    }
}

pub async fn get_teams(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match database::teams::list_all(&conn) {
        Ok(teams) => Json(teams).into_response(),
        Err(e) => internal_error("Team Error", e),
    }
}

pub async fn get_current_match_day(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CurrentMatchDayParams>,
) -> impl IntoResponse {
    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match current_match_day(&conn, Utc::now().naive_utc(), params.user_id.as_deref()) {
        Ok(Some(open)) => Json(CurrentMatchDayResponse::from(open)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "No active match day at the moment").into_response(),
        Err(e) => internal_error("Match Day Error", e),
    }
}

pub async fn post_prediction(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> impl IntoResponse {
    let conn = match state.connection() {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    let result = submit_prediction(
        &conn,
        &request.user_id,
        request.match_day_id,
        request.predicted_total_goals,
        Utc::now().naive_utc(),
    );

    match result {
        Ok(prediction) => Json(prediction).into_response(),
        Err(SubmissionError::Storage(e)) => internal_error("Prediction Error", e),
        Err(e) => (submission_status(&e), e.to_string()).into_response(),
    }
}

fn submission_status(error: &SubmissionError) -> StatusCode {
    match error {
        SubmissionError::ProfileNotFound(_) | SubmissionError::MatchDayNotFound(_) => StatusCode::NOT_FOUND,
        SubmissionError::SubscriptionInactive(_) => StatusCode::PAYMENT_REQUIRED,
        SubmissionError::MatchDayClosed(_) => StatusCode::CONFLICT,
        SubmissionError::InvalidPrediction(_) => StatusCode::BAD_REQUEST,
        SubmissionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
