use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::database::{Game, MatchDay, Prediction, SubscriptionStatus};
use crate::scoring::LeaderboardEntry;
use crate::services::leaderboard::Leaderboard;
use crate::services::predictions::OpenMatchDay;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
    pub rank: usize,
    pub user_id: String,
    pub team_name: String,
    pub total_points: i64,
    pub predictions_count: usize,
}

impl From<LeaderboardEntry> for LeaderboardItem {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            user_id: entry.user_id,
            team_name: entry.team_name,
            total_points: entry.total_points,
            predictions_count: entry.predictions_count,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub season_id: Option<i64>,
    pub season_name: Option<String>,
    pub entries: Vec<LeaderboardItem>,
}

impl From<Leaderboard> for LeaderboardResponse {
    fn from(leaderboard: Leaderboard) -> Self {
        Self {
            season_id: leaderboard.season.as_ref().map(|s| s.id),
            season_name: leaderboard.season.map(|s| s.name),
            entries: leaderboard.entries.into_iter().map(LeaderboardItem::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMatchDayResponse {
    pub match_day: MatchDay,
    pub games: Vec<Game>,
    pub accepting_predictions: bool,
    pub existing_prediction: Option<Prediction>,
}

impl From<OpenMatchDay> for CurrentMatchDayResponse {
    fn from(open: OpenMatchDay) -> Self {
        Self {
            match_day: open.match_day,
            games: open.games,
            accepting_predictions: open.accepting_predictions,
            existing_prediction: open.existing_prediction,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardParams {
    pub season_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMatchDayParams {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub id: String,
    pub display_name: String,
    pub team_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub user_id: String,
    pub match_day_id: i64,
    pub predicted_total_goals: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeasonRequest {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDayRequest {
    pub season_id: i64,
    pub match_date: NaiveDate,
    pub cutoff_at: NaiveDateTime,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub match_day_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: NaiveDateTime,
    #[serde(default)]
    pub is_selected: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreRequest {
    pub home_goals: u32,
    pub away_goals: u32,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    pub actual_total_goals: Option<i64>,
}

#[derive(Deserialize)]
pub struct SubscriptionRequest {
    pub status: SubscriptionStatus,
}
