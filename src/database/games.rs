use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Game;

/// Mirrors the `CHECK` on `games.home_goals` and `games.away_goals`
pub const MAX_GOALS_PER_SIDE: u32 = 1000;

const GAME_COLUMNS: &str =
    "id, match_day_id, home_team, away_team, kickoff_at, home_goals, away_goals, is_selected, created_at";

pub fn insert_game(
    conn: &Connection,
    match_day_id: i64,
    home_team: &str,
    away_team: &str,
    kickoff_at: NaiveDateTime,
    is_selected: bool,
) -> Result<Game> {
    let sql = format!(
        "INSERT INTO games (match_day_id, home_team, away_team, kickoff_at, is_selected) \
         VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {GAME_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![match_day_id, home_team, away_team, kickoff_at, is_selected],
        parse_game_row,
    )
    .context("Failed to insert game")
}

pub fn record_score(conn: &Connection, id: i64, home_goals: u32, away_goals: u32) -> Result<Option<Game>> {
    let sql = format!("UPDATE games SET home_goals = ?1, away_goals = ?2 WHERE id = ?3 RETURNING {GAME_COLUMNS}");

    conn.query_row(&sql, params![home_goals, away_goals, id], parse_game_row)
        .optional()
        .context("Failed to record game score")
}

pub fn list_by_match_day(conn: &Connection, match_day_id: i64) -> Result<Vec<Game>> {
    let sql = format!("SELECT {GAME_COLUMNS} FROM games WHERE match_day_id = ?1 ORDER BY kickoff_at, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![match_day_id], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        match_day_id: row.get(1)?,
        home_team: row.get(2)?,
        away_team: row.get(3)?,
        kickoff_at: row.get(4)?,
        home_goals: row.get(5)?,
        away_goals: row.get(6)?,
        is_selected: row.get(7)?,
        created_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::match_days::insert_match_day;
    use crate::database::seasons::create_active_season;
    use crate::database::test_support::{date, datetime, fresh_connection};

    #[test]
    fn test_games_listed_by_kickoff() {
        let mut conn = fresh_connection();
        let season = create_active_season(&mut conn, "Spring", date(1), date(30)).unwrap();
        let day = insert_match_day(&conn, season.id, date(2), datetime(2, 14)).unwrap();

        insert_game(&conn, day.id, "Late", "Side", datetime(2, 20), true).unwrap();
        insert_game(&conn, day.id, "Early", "Side", datetime(2, 15), false).unwrap();

        let games = list_by_match_day(&conn, day.id).unwrap();
        let homes: Vec<&str> = games.iter().map(|g| g.home_team.as_str()).collect();
        assert_eq!(homes, vec!["Early", "Late"]);
    }

    #[test]
    fn test_record_score() {
        let mut conn = fresh_connection();
        let season = create_active_season(&mut conn, "Spring", date(1), date(30)).unwrap();
        let day = insert_match_day(&conn, season.id, date(2), datetime(2, 14)).unwrap();
        let game = insert_game(&conn, day.id, "Home", "Away", datetime(2, 15), true).unwrap();
        assert_eq!(game.total_goals(), None);

        let scored = record_score(&conn, game.id, 2, 1).unwrap().unwrap();
        assert_eq!(scored.total_goals(), Some(3));

        assert!(record_score(&conn, 999, 0, 0).unwrap().is_none());
    }

    #[test]
    fn test_score_above_limit_rejected() {
        let mut conn = fresh_connection();
        let season = create_active_season(&mut conn, "Spring", date(1), date(30)).unwrap();
        let day = insert_match_day(&conn, season.id, date(2), datetime(2, 14)).unwrap();
        let game = insert_game(&conn, day.id, "Home", "Away", datetime(2, 15), true).unwrap();

        assert!(record_score(&conn, game.id, MAX_GOALS_PER_SIDE, 0).is_ok());
        assert!(record_score(&conn, game.id, MAX_GOALS_PER_SIDE + 1, 0).is_err());
        assert!(record_score(&conn, game.id, 0, u32::MAX).is_err());
    }
}
