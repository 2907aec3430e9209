pub mod connection;
pub mod games;
pub mod match_days;
pub mod models;
pub mod predictions;
pub mod profiles;
pub mod seasons;
pub mod setup;
pub mod teams;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::connection::{create_memory_pool, get_connection, DbConn, DbPool};
    use super::setup::reset_database;

    pub fn fresh_pool() -> DbPool {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        reset_database(&conn).unwrap();
        pool
    }

    pub fn fresh_connection() -> DbConn {
        get_connection(&fresh_pool()).unwrap()
    }

    pub fn team(conn: &rusqlite::Connection, name: &str) -> Option<i64> {
        Some(super::teams::insert_team(conn, name).unwrap().id)
    }

    pub fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    pub fn datetime(day: u32, hour: u32) -> NaiveDateTime {
        date(day).and_hms_opt(hour, 0, 0).unwrap()
    }
}
