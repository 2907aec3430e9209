use thiserror::Error;

/// A scored-prediction batch that cannot be aggregated.
///
/// The whole batch is rejected; rows are never dropped one by one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("scored prediction at position {index} has no user id")]
    MissingUserId { index: usize },
    #[error("scored prediction at position {index} (user {user_id}) has no points")]
    MissingPoints { index: usize, user_id: String },
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("profile {0} not found")]
    ProfileNotFound(String),
    #[error("subscription for profile {0} is not active")]
    SubscriptionInactive(String),
    #[error("match day {0} not found")]
    MatchDayNotFound(i64),
    #[error("match day {0} is closed for predictions")]
    MatchDayClosed(i64),
    #[error("predicted total goals must be a non-negative number, got {0}")]
    InvalidPrediction(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GradingError {
    #[error("match day {0} not found")]
    MatchDayNotFound(i64),
    #[error("match day {0} has no selected games to total")]
    NoSelectedGames(i64),
    #[error("match day {match_day_id} has {missing} selected game(s) without a final score")]
    UnscoredGames { match_day_id: i64, missing: usize },
    #[error("selected games of match day {0} add up to more goals than can be stored")]
    GoalTotalOverflow(i64),
    #[error("actual total goals must be a non-negative number, got {0}")]
    InvalidActual(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
