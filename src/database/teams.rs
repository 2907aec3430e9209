use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Team;

pub fn insert_team(conn: &Connection, name: &str) -> Result<Team> {
    conn.query_row(
        "INSERT INTO teams (name) VALUES (?1) RETURNING id, name",
        params![name],
        parse_team_row,
    )
    .context("Failed to insert team")
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Team>> {
    conn.query_row("SELECT id, name FROM teams WHERE id = ?1", params![id], parse_team_row)
        .optional()
        .context("Failed to query team by id")
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Team>> {
    conn.query_row("SELECT id, name FROM teams WHERE name = ?1", params![name], parse_team_row)
        .optional()
        .context("Failed to query team by name")
}

/// Team catalog for sign-up, alphabetical
pub fn list_all(conn: &Connection) -> Result<Vec<Team>> {
    let mut stmt = conn.prepare("SELECT id, name FROM teams ORDER BY name, id")?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
