use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Prediction;
use crate::scoring::PredictionRow;

const PREDICTION_COLUMNS: &str = "id, user_id, match_day_id, predicted_total_goals, points, created_at";

/// Creates the user's prediction for a match day, or replaces its value.
pub fn upsert_prediction(
    conn: &Connection,
    user_id: &str,
    match_day_id: i64,
    predicted_total_goals: u32,
) -> Result<Prediction> {
    let sql = format!(
        "INSERT INTO predictions (user_id, match_day_id, predicted_total_goals) VALUES (?1, ?2, ?3) \
         ON CONFLICT(user_id, match_day_id) DO UPDATE SET predicted_total_goals = excluded.predicted_total_goals \
         RETURNING {PREDICTION_COLUMNS}"
    );

    conn.query_row(&sql, params![user_id, match_day_id, predicted_total_goals], parse_prediction_row)
        .context("Failed to upsert prediction")
}

pub fn find_for_user(conn: &Connection, user_id: &str, match_day_id: i64) -> Result<Option<Prediction>> {
    let sql = format!("SELECT {PREDICTION_COLUMNS} FROM predictions WHERE user_id = ?1 AND match_day_id = ?2");

    conn.query_row(&sql, params![user_id, match_day_id], parse_prediction_row)
        .optional()
        .context("Failed to query prediction")
}

pub fn list_by_match_day(conn: &Connection, match_day_id: i64) -> Result<Vec<Prediction>> {
    let sql = format!("SELECT {PREDICTION_COLUMNS} FROM predictions WHERE match_day_id = ?1 ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![match_day_id], parse_prediction_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn set_points(conn: &Connection, id: i64, points: i32) -> Result<()> {
    conn.execute("UPDATE predictions SET points = ?1 WHERE id = ?2", params![points, id])
        .context("Failed to set prediction points")
        .map(|_| ())
}

/// Graded predictions with the owner's team name, oldest submission first.
///
/// `season_id` of `None` spans every season.
pub fn list_scored(conn: &Connection, season_id: Option<i64>) -> Result<Vec<PredictionRow>> {
    let sql = "SELECT p.user_id, t.name, p.points \
               FROM predictions p \
               JOIN profiles pr ON pr.id = p.user_id \
               LEFT JOIN teams t ON t.id = pr.team_id \
               JOIN match_days md ON md.id = p.match_day_id \
               WHERE p.points IS NOT NULL AND (?1 IS NULL OR md.season_id = ?1) \
               ORDER BY p.created_at, p.id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![season_id], |row| {
            Ok(PredictionRow {
                user_id: row.get(0)?,
                team_name: row.get(1)?,
                points: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list scored predictions")?;

    Ok(rows)
}

fn parse_prediction_row(row: &rusqlite::Row) -> rusqlite::Result<Prediction> {
    Ok(Prediction {
        id: row.get(0)?,
        user_id: row.get(1)?,
        match_day_id: row.get(2)?,
        predicted_total_goals: row.get(3)?,
        points: row.get(4)?,
        created_at: row.get(5)?,
    })
}
