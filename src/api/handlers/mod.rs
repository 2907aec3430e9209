use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::settings::AppConfig;
use crate::database::{DbConn, DbPool};

pub mod admin;
pub mod leaderboard;
pub mod predictions;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

impl AppState {
    pub(crate) fn connection(&self) -> Result<DbConn, Response> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get database connection: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        })
    }

    pub(crate) fn is_admin(&self, headers: &HeaderMap) -> bool {
        let expected = format!("Bearer {}", self.config.server.admin_token);
        headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .is_some_and(|h| h == expected)
    }
}

pub(crate) fn internal_error(context: &str, e: impl std::fmt::Display) -> Response {
    log::error!("{}: {}", context, e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {}", context, e)).into_response()
}
