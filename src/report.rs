use colored::Colorize;

use crate::services::leaderboard::Leaderboard;

const PODIUM: usize = 3;

/// Plain-text leaderboard table; podium rows are highlighted.
pub fn render_leaderboard(leaderboard: &Leaderboard) -> String {
    let title = leaderboard
        .season
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("All seasons");

    let mut out = format!("{}\n", format!("Season Leaderboard - {title}").as_str().bold());

    if leaderboard.entries.is_empty() {
        out.push_str("No predictions scored yet. Check back soon!\n");
        return out;
    }

    out.push_str(&format!("{:>4}  {:<30} {:>8} {:>11}\n", "Rank", "Team Name", "Points", "Predictions"));
    for entry in &leaderboard.entries {
        let line = format!(
            "{:>4}  {:<30} {:>8} {:>11}",
            entry.rank, entry.team_name, entry.total_points, entry.predictions_count
        );
        if entry.rank <= PODIUM {
            out.push_str(&line.as_str().green().bold().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out
}
