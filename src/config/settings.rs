#[derive(Debug, Clone)]
pub struct ScoringSettings {
    /// Kept within `u16` so every award fits the `i32` points column
    pub max_points: u16,
    pub points_per_goal_off: u16,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            max_points: 10,
            points_per_goal_off: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardSettings {
    pub unknown_team_label: String,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            unknown_team_label: "Unknown Team".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
    pub admin_token: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: "matchday_leaderboard.db".to_string(),
            admin_token: "secret".to_string(),
        }
    }
}

impl ServerSettings {
    /// Defaults overridden by `DATABASE_PATH` and `ADMIN_TOKEN`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            admin_token: std::env::var("ADMIN_TOKEN").unwrap_or(defaults.admin_token),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub leaderboard: LeaderboardSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            leaderboard: LeaderboardSettings::default(),
            server: ServerSettings::from_env(),
        }
    }
}
