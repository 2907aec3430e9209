use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Inactive,
    Active,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inactive" => Ok(SubscriptionStatus::Inactive),
            "active" => Ok(SubscriptionStatus::Active),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            other => Err(format!("unknown subscription status: {other}")),
        }
    }
}

impl ToSql for SubscriptionStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SubscriptionStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub team_id: Option<i64>,
    /// Resolved from `teams`
    pub team_name: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDay {
    pub id: i64,
    pub season_id: i64,
    pub match_date: NaiveDate,
    /// UTC
    pub cutoff_at: NaiveDateTime,
    pub is_open: bool,
    pub actual_total_goals: Option<u32>,
    pub created_at: NaiveDateTime,
}

impl MatchDay {
    pub fn accepts_predictions(&self, now: NaiveDateTime) -> bool {
        self.is_open && now < self.cutoff_at
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub match_day_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: NaiveDateTime,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub is_selected: bool,
    pub created_at: NaiveDateTime,
}

impl Game {
    /// Combined goals, once both sides have a recorded score.
    ///
    /// `None` also when the sum does not fit in a `u32`.
    pub fn total_goals(&self) -> Option<u32> {
        self.home_goals?.checked_add(self.away_goals?)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: i64,
    pub user_id: String,
    pub match_day_id: i64,
    pub predicted_total_goals: u32,
    pub points: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn match_day(is_open: bool) -> MatchDay {
        MatchDay {
            id: 1,
            season_id: 1,
            match_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            cutoff_at: at(15),
            is_open,
            actual_total_goals: None,
            created_at: at(0),
        }
    }

    #[test]
    fn test_accepts_predictions_before_cutoff_only() {
        assert!(match_day(true).accepts_predictions(at(14)));
        assert!(!match_day(true).accepts_predictions(at(15)));
        assert!(!match_day(false).accepts_predictions(at(14)));
    }

    #[test]
    fn test_subscription_status_round_trips_through_str() {
        for status in [SubscriptionStatus::Inactive, SubscriptionStatus::Active, SubscriptionStatus::Cancelled] {
            assert_eq!(status.as_str().parse::<SubscriptionStatus>(), Ok(status));
        }
        assert!("paused".parse::<SubscriptionStatus>().is_err());
    }

    #[test]
    fn test_game_total_requires_both_scores() {
        let mut game = Game {
            id: 1,
            match_day_id: 1,
            home_team: "Home".to_string(),
            away_team: "Away".to_string(),
            kickoff_at: at(16),
            home_goals: Some(2),
            away_goals: None,
            is_selected: true,
            created_at: at(0),
        };
        assert_eq!(game.total_goals(), None);

        game.away_goals = Some(1);
        assert_eq!(game.total_goals(), Some(3));
    }

    #[test]
    fn test_game_total_does_not_overflow() {
        let game = Game {
            id: 1,
            match_day_id: 1,
            home_team: "Home".to_string(),
            away_team: "Away".to_string(),
            kickoff_at: at(16),
            home_goals: Some(u32::MAX),
            away_goals: Some(1),
            is_selected: true,
            created_at: at(0),
        };
        assert_eq!(game.total_goals(), None);
    }
}
