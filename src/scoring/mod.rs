pub mod leaderboard;
pub mod points;
pub mod types;

pub use leaderboard::compute_leaderboard;
pub use points::derive_points;
pub use types::{collect_scored, LeaderboardEntry, PredictionRow, ScoredPrediction, UserId};
