use anyhow::Result;
use log::{info, warn};
use rusqlite::Connection;

use crate::config::settings::LeaderboardSettings;
use crate::database::{self, Season};
use crate::scoring::{self, LeaderboardEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardScope {
    /// A specific season
    Season(i64),
    /// The active season, or every season when none is active
    Current,
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub season: Option<Season>,
    pub entries: Vec<LeaderboardEntry>,
}

pub struct LeaderboardService {
    settings: LeaderboardSettings,
}

impl LeaderboardService {
    pub fn new(settings: LeaderboardSettings) -> Self {
        Self { settings }
    }

    /// Recomputes the leaderboard from stored predictions.
    ///
    /// Returns `None` when an explicit season does not exist.
    pub fn build(&self, conn: &Connection, scope: LeaderboardScope) -> Result<Option<Leaderboard>> {
        let season = match scope {
            LeaderboardScope::Season(id) => match database::seasons::find_by_id(conn, id)? {
                Some(season) => Some(season),
                None => {
                    warn!("Leaderboard requested for unknown season {}", id);
                    return Ok(None);
                }
            },
            LeaderboardScope::Current => database::seasons::find_active(conn)?,
        };

        let rows = database::predictions::list_scored(conn, season.as_ref().map(|s| s.id))?;
        let records = scoring::collect_scored(rows)?;
        let entries = scoring::compute_leaderboard(&records, &self.settings);

        info!(
            "Leaderboard for {}: {} entries from {} scored predictions",
            season.as_ref().map(|s| s.name.as_str()).unwrap_or("all seasons"),
            entries.len(),
            records.len()
        );

        Ok(Some(Leaderboard { season, entries }))
    }
}
