use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::MatchDay;

const MATCH_DAY_COLUMNS: &str = "id, season_id, match_date, cutoff_at, is_open, actual_total_goals, created_at";

pub fn insert_match_day(
    conn: &Connection,
    season_id: i64,
    match_date: NaiveDate,
    cutoff_at: NaiveDateTime,
) -> Result<MatchDay> {
    let sql = format!(
        "INSERT INTO match_days (season_id, match_date, cutoff_at) VALUES (?1, ?2, ?3) RETURNING {MATCH_DAY_COLUMNS}"
    );

    conn.query_row(&sql, params![season_id, match_date, cutoff_at], parse_match_day_row)
        .context("Failed to insert match day")
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<MatchDay>> {
    let sql = format!("SELECT {MATCH_DAY_COLUMNS} FROM match_days WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_match_day_row)
        .optional()
        .context("Failed to query match day by id")
}

/// Latest open match day by date
pub fn find_current_open(conn: &Connection) -> Result<Option<MatchDay>> {
    let sql = format!(
        "SELECT {MATCH_DAY_COLUMNS} FROM match_days WHERE is_open = 1 ORDER BY match_date DESC, id DESC LIMIT 1"
    );

    conn.query_row(&sql, [], parse_match_day_row)
        .optional()
        .context("Failed to query current match day")
}

/// Stores the final total and closes the match day for predictions.
pub fn record_result(conn: &Connection, id: i64, actual_total_goals: u32) -> Result<MatchDay> {
    let sql = format!(
        "UPDATE match_days SET actual_total_goals = ?1, is_open = 0 WHERE id = ?2 RETURNING {MATCH_DAY_COLUMNS}"
    );

    conn.query_row(&sql, params![actual_total_goals, id], parse_match_day_row)
        .context("Failed to record match day result")
}

fn parse_match_day_row(row: &rusqlite::Row) -> rusqlite::Result<MatchDay> {
    Ok(MatchDay {
        id: row.get(0)?,
        season_id: row.get(1)?,
        match_date: row.get(2)?,
        cutoff_at: row.get(3)?,
        is_open: row.get(4)?,
        actual_total_goals: row.get(5)?,
        created_at: row.get(6)?,
    })
}
