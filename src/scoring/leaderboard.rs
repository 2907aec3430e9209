use log::debug;

use std::collections::HashMap;

use super::types::{LeaderboardEntry, ScoredPrediction, UserId};
use crate::config::settings::LeaderboardSettings;

struct UserTotals<'a> {
    user_id: &'a str,
    team_name: Option<&'a str>,
    total_points: i64,
    predictions_count: usize,
}

/// Builds the ranked leaderboard from graded predictions.
///
/// Users are ordered by total points, highest first. Ties keep the order in
/// which users first appear in `records`, and every entry gets its own rank.
pub fn compute_leaderboard(records: &[ScoredPrediction], settings: &LeaderboardSettings) -> Vec<LeaderboardEntry> {
    debug!("Aggregating {} scored predictions", records.len());

    // 1. Group by user, first-seen order
    let totals = group_by_user(records);

    // 2. Materialise entries
    let mut entries: Vec<LeaderboardEntry> = totals
        .into_iter()
        .map(|totals| into_entry(totals, settings))
        .collect();

    // 3. Stable sort keeps encounter order among ties
    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    // 4. Dense ranks
    assign_ranks(&mut entries);

    debug!("Leaderboard has {} entries", entries.len());
    entries
}

fn group_by_user(records: &[ScoredPrediction]) -> Vec<UserTotals<'_>> {
    let mut user_to_idx: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<UserTotals> = Vec::new();

    for record in records {
        let idx = *user_to_idx.entry(record.user_id.as_str()).or_insert_with(|| {
            totals.push(UserTotals {
                user_id: &record.user_id,
                team_name: record.team_name.as_deref(),
                total_points: 0,
                predictions_count: 0,
            });
            totals.len() - 1
        });

        let user = &mut totals[idx];
        user.total_points += i64::from(record.points);
        user.predictions_count += 1;
    }

    totals
}

fn into_entry(totals: UserTotals<'_>, settings: &LeaderboardSettings) -> LeaderboardEntry {
    LeaderboardEntry {
        user_id: UserId::from(totals.user_id),
        team_name: totals
            .team_name
            .unwrap_or(&settings.unknown_team_label)
            .to_string(),
        total_points: totals.total_points,
        predictions_count: totals.predictions_count,
        rank: 0,
    }
}

fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }
}
