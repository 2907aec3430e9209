pub mod grading;
pub mod leaderboard;
pub mod predictions;
pub mod server;
