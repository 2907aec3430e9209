use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Season;

const SEASON_COLUMNS: &str = "id, name, start_date, end_date, is_active, created_at";

/// Creates a season and makes it the only active one.
pub fn create_active_season(
    conn: &mut Connection,
    name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Season> {
    let tx = conn.transaction()?;

    tx.execute("UPDATE seasons SET is_active = 0 WHERE is_active = 1", [])
        .context("Failed to deactivate previous seasons")?;

    let sql = format!(
        "INSERT INTO seasons (name, start_date, end_date, is_active) VALUES (?1, ?2, ?3, 1) RETURNING {SEASON_COLUMNS}"
    );
    let season = tx
        .query_row(&sql, params![name, start_date, end_date], parse_season_row)
        .context("Failed to insert season")?;

    tx.commit()?;
    Ok(season)
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Season>> {
    let sql = format!("SELECT {SEASON_COLUMNS} FROM seasons WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_season_row)
        .optional()
        .context("Failed to query season by id")
}

pub fn find_active(conn: &Connection) -> Result<Option<Season>> {
    let sql = format!("SELECT {SEASON_COLUMNS} FROM seasons WHERE is_active = 1 ORDER BY id DESC LIMIT 1");

    conn.query_row(&sql, [], parse_season_row)
        .optional()
        .context("Failed to query active season")
}

fn parse_season_row(row: &rusqlite::Row) -> rusqlite::Result<Season> {
    Ok(Season {
        id: row.get(0)?,
        name: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        is_active: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{date, fresh_connection};

    #[test]
    fn test_no_active_season_initially() {
        let conn = fresh_connection();
        assert!(find_active(&conn).unwrap().is_none());
    }

    #[test]
    fn test_new_season_replaces_active() {
        let mut conn = fresh_connection();

        let first = create_active_season(&mut conn, "Spring", date(1), date(20)).unwrap();
        let second = create_active_season(&mut conn, "Autumn", date(21), date(30)).unwrap();

        let active = find_active(&conn).unwrap().unwrap();
        assert_eq!(active.id, second.id);
        assert_eq!(active.name, "Autumn");
        assert!(!find_by_id(&conn, first.id).unwrap().unwrap().is_active);
    }
}
