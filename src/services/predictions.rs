use chrono::NaiveDateTime;
use log::info;
use rusqlite::Connection;

use crate::database::{self, Game, MatchDay, Prediction, SubscriptionStatus};
use crate::errors::SubmissionError;

/// The match day currently open for predictions, with its fixtures
#[derive(Debug, Clone)]
pub struct OpenMatchDay {
    pub match_day: MatchDay,
    pub games: Vec<Game>,
    pub accepting_predictions: bool,
    /// The asking user's earlier guess for this match day, if any
    pub existing_prediction: Option<Prediction>,
}

pub fn current_match_day(
    conn: &Connection,
    now: NaiveDateTime,
    user_id: Option<&str>,
) -> anyhow::Result<Option<OpenMatchDay>> {
    let Some(match_day) = database::match_days::find_current_open(conn)? else {
        return Ok(None);
    };

    let games = database::games::list_by_match_day(conn, match_day.id)?;
    let accepting_predictions = match_day.accepts_predictions(now);
    let existing_prediction = match user_id {
        Some(user_id) => database::predictions::find_for_user(conn, user_id, match_day.id)?,
        None => None,
    };

    Ok(Some(OpenMatchDay {
        match_day,
        games,
        accepting_predictions,
        existing_prediction,
    }))
}

/// Records a user's total-goals guess for a match day.
///
/// Only subscribed users may predict, and only before the match day's
/// cutoff. Submitting again replaces the earlier guess.
pub fn submit_prediction(
    conn: &Connection,
    user_id: &str,
    match_day_id: i64,
    predicted_total_goals: i64,
    now: NaiveDateTime,
) -> Result<Prediction, SubmissionError> {
    let predicted = u32::try_from(predicted_total_goals)
        .map_err(|_| SubmissionError::InvalidPrediction(predicted_total_goals))?;

    let profile = database::profiles::find_by_id(conn, user_id)?
        .ok_or_else(|| SubmissionError::ProfileNotFound(user_id.to_string()))?;
    if profile.subscription_status != SubscriptionStatus::Active {
        return Err(SubmissionError::SubscriptionInactive(profile.id));
    }

    let match_day = database::match_days::find_by_id(conn, match_day_id)?
        .ok_or(SubmissionError::MatchDayNotFound(match_day_id))?;
    if !match_day.accepts_predictions(now) {
        return Err(SubmissionError::MatchDayClosed(match_day_id));
    }

    let prediction = database::predictions::upsert_prediction(conn, user_id, match_day_id, predicted)?;
    info!(
        "User {} predicted {} total goals for match day {}",
        user_id, predicted, match_day_id
    );
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{date, datetime, fresh_connection, team};
    use crate::database::{games, match_days, profiles, seasons};

    struct Fixture {
        conn: database::DbConn,
        match_day_id: i64,
    }

    fn fixture() -> Fixture {
        let mut conn = fresh_connection();
        let red = team(&conn, "Red");
        profiles::upsert_profile(&conn, "paid", "Paid", red).unwrap();
        profiles::set_subscription_status(&conn, "paid", SubscriptionStatus::Active).unwrap();
        profiles::upsert_profile(&conn, "free", "Free", None).unwrap();

        let season = seasons::create_active_season(&mut conn, "Spring", date(1), date(30)).unwrap();
        let day = match_days::insert_match_day(&conn, season.id, date(2), datetime(2, 14)).unwrap();
        games::insert_game(&conn, day.id, "Home", "Away", datetime(2, 16), true).unwrap();

        Fixture {
            conn,
            match_day_id: day.id,
        }
    }

    #[test]
    fn test_submit_and_resubmit() {
        let f = fixture();

        submit_prediction(&f.conn, "paid", f.match_day_id, 2, datetime(2, 10)).unwrap();
        let updated = submit_prediction(&f.conn, "paid", f.match_day_id, 4, datetime(2, 11)).unwrap();

        assert_eq!(updated.predicted_total_goals, 4);
        let stored = database::predictions::find_for_user(&f.conn, "paid", f.match_day_id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, updated.id);
    }

    #[test]
    fn test_negative_prediction() {
        let f = fixture();
        let result = submit_prediction(&f.conn, "paid", f.match_day_id, -1, datetime(2, 10));
        assert!(matches!(result, Err(SubmissionError::InvalidPrediction(-1))));
    }

    #[test]
    fn test_inactive_subscription_hits_paywall() {
        let f = fixture();
        let result = submit_prediction(&f.conn, "free", f.match_day_id, 2, datetime(2, 10));
        assert!(matches!(result, Err(SubmissionError::SubscriptionInactive(_))));
    }

    #[test]
    fn test_unknown_profile_and_match_day() {
        let f = fixture();
        assert!(matches!(
            submit_prediction(&f.conn, "ghost", f.match_day_id, 2, datetime(2, 10)),
            Err(SubmissionError::ProfileNotFound(_))
        ));
        assert!(matches!(
            submit_prediction(&f.conn, "paid", 999, 2, datetime(2, 10)),
            Err(SubmissionError::MatchDayNotFound(999))
        ));
    }

    #[test]
    fn test_cutoff_locks_predictions() {
        let f = fixture();
        let result = submit_prediction(&f.conn, "paid", f.match_day_id, 2, datetime(2, 14));
        assert!(matches!(result, Err(SubmissionError::MatchDayClosed(_))));
    }

    #[test]
    fn test_current_match_day_reports_cutoff() {
        let f = fixture();

        let before = current_match_day(&f.conn, datetime(2, 10), None).unwrap().unwrap();
        assert!(before.accepting_predictions);
        assert_eq!(before.games.len(), 1);

        let after = current_match_day(&f.conn, datetime(2, 15), None).unwrap().unwrap();
        assert!(!after.accepting_predictions);
    }

    #[test]
    fn test_current_match_day_includes_users_guess() {
        let f = fixture();
        submit_prediction(&f.conn, "paid", f.match_day_id, 3, datetime(2, 10)).unwrap();

        let paid = current_match_day(&f.conn, datetime(2, 11), Some("paid")).unwrap().unwrap();
        assert_eq!(paid.existing_prediction.map(|p| p.predicted_total_goals), Some(3));

        let free = current_match_day(&f.conn, datetime(2, 11), Some("free")).unwrap().unwrap();
        assert!(free.existing_prediction.is_none());

        let anonymous = current_match_day(&f.conn, datetime(2, 11), None).unwrap().unwrap();
        assert!(anonymous.existing_prediction.is_none());
    }
}
