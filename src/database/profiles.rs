use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Profile, SubscriptionStatus};

const PROFILE_SELECT: &str = "SELECT p.id, p.display_name, p.team_id, t.name, p.subscription_status, p.created_at \
                              FROM profiles p LEFT JOIN teams t ON t.id = p.team_id";

/// Inserts a profile, or refreshes the name and team of an existing one.
///
/// Subscription status is left untouched on update.
pub fn upsert_profile(
    conn: &Connection,
    id: &str,
    display_name: &str,
    team_id: Option<i64>,
) -> Result<Profile> {
    conn.execute(
        "INSERT INTO profiles (id, display_name, team_id) VALUES (?1, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET display_name = excluded.display_name, team_id = excluded.team_id",
        params![id, display_name, team_id],
    )
    .context("Failed to upsert profile")?;

    find_by_id(conn, id)?.context("Profile missing after upsert")
}

pub fn find_by_id(conn: &Connection, id: &str) -> Result<Option<Profile>> {
    let sql = format!("{PROFILE_SELECT} WHERE p.id = ?1");

    conn.query_row(&sql, params![id], parse_profile_row)
        .optional()
        .context("Failed to query profile by id")
}

pub fn set_subscription_status(
    conn: &Connection,
    id: &str,
    status: SubscriptionStatus,
) -> Result<Option<Profile>> {
    let updated = conn
        .execute(
            "UPDATE profiles SET subscription_status = ?1 WHERE id = ?2",
            params![status, id],
        )
        .context("Failed to update subscription status")?;

    if updated == 0 {
        return Ok(None);
    }
    find_by_id(conn, id)
}

fn parse_profile_row(row: &rusqlite::Row) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        display_name: row.get(1)?,
        team_id: row.get(2)?,
        team_name: row.get(3)?,
        subscription_status: row.get(4)?,
        created_at: row.get(5)?,
    })
}
