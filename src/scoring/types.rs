use crate::errors::ScoringError;

pub type UserId = String;
pub type Points = i32;

/// A row as it comes out of the prediction store, before validation.
#[derive(Debug, Clone, Default)]
pub struct PredictionRow {
    pub user_id: Option<String>,
    pub team_name: Option<String>,
    pub points: Option<Points>,
}

/// A graded prediction: one per (user, match day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPrediction {
    pub user_id: UserId,
    pub team_name: Option<String>,
    pub points: Points,
}

impl ScoredPrediction {
    pub fn new(user_id: impl Into<UserId>, team_name: Option<&str>, points: Points) -> Self {
        Self {
            user_id: user_id.into(),
            team_name: normalize_team_name(team_name),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub team_name: String,
    pub total_points: i64,
    pub predictions_count: usize,
    pub rank: usize,
}

/// Validates a batch of stored rows into scored predictions.
///
/// Fails on the first row lacking a user id or points, so upstream data
/// problems surface instead of silently shrinking the leaderboard.
pub fn collect_scored(rows: Vec<PredictionRow>) -> Result<Vec<ScoredPrediction>, ScoringError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| validate_row(index, row))
        .collect()
}

fn validate_row(index: usize, row: PredictionRow) -> Result<ScoredPrediction, ScoringError> {
    let user_id = row
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ScoringError::MissingUserId { index })?;

    let points = row.points.ok_or_else(|| ScoringError::MissingPoints {
        index,
        user_id: user_id.clone(),
    })?;

    Ok(ScoredPrediction {
        user_id,
        team_name: normalize_team_name(row.team_name.as_deref()),
        points,
    })
}

fn normalize_team_name(team_name: Option<&str>) -> Option<String> {
    team_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
