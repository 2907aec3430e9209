use anyhow::Context;
use log::info;
use rusqlite::Connection;
use serde::Serialize;

use crate::config::settings::ScoringSettings;
use crate::database::{self, Game};
use crate::errors::GradingError;
use crate::scoring::derive_points;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingSummary {
    pub match_day_id: i64,
    pub actual_total_goals: u32,
    pub graded: usize,
}

pub struct GradingService {
    settings: ScoringSettings,
}

impl GradingService {
    pub fn new(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    /// Closes a match day and awards points to every prediction made for it.
    ///
    /// Without an explicit `actual_total_goals`, the total is summed from the
    /// day's selected games. Grading again overwrites earlier points.
    pub fn grade_match_day(
        &self,
        conn: &mut Connection,
        match_day_id: i64,
        actual_total_goals: Option<i64>,
    ) -> Result<GradingSummary, GradingError> {
        let tx = conn
            .transaction()
            .context("Failed to start grading transaction")?;

        if database::match_days::find_by_id(&tx, match_day_id)?.is_none() {
            return Err(GradingError::MatchDayNotFound(match_day_id));
        }

        let actual = match actual_total_goals {
            Some(value) => u32::try_from(value).map_err(|_| GradingError::InvalidActual(value))?,
            None => {
                let games = database::games::list_by_match_day(&tx, match_day_id)?;
                total_of_selected_games(match_day_id, &games)?
            }
        };

        database::match_days::record_result(&tx, match_day_id, actual)?;

        let predictions = database::predictions::list_by_match_day(&tx, match_day_id)?;
        for prediction in &predictions {
            let points = derive_points(prediction.predicted_total_goals, actual, &self.settings);
            database::predictions::set_points(&tx, prediction.id, points)?;
        }

        tx.commit().context("Failed to commit grading")?;

        info!(
            "Graded {} predictions for match day {} (actual total goals: {})",
            predictions.len(),
            match_day_id,
            actual
        );

        Ok(GradingSummary {
            match_day_id,
            actual_total_goals: actual,
            graded: predictions.len(),
        })
    }
}

fn total_of_selected_games(match_day_id: i64, games: &[Game]) -> Result<u32, GradingError> {
    let selected: Vec<&Game> = games.iter().filter(|g| g.is_selected).collect();
    if selected.is_empty() {
        return Err(GradingError::NoSelectedGames(match_day_id));
    }

    let missing = selected
        .iter()
        .filter(|g| g.home_goals.is_none() || g.away_goals.is_none())
        .count();
    if missing > 0 {
        return Err(GradingError::UnscoredGames { match_day_id, missing });
    }

    selected
        .iter()
        .try_fold(0u32, |total, game| game.total_goals().and_then(|goals| total.checked_add(goals)))
        .ok_or(GradingError::GoalTotalOverflow(match_day_id))
}
