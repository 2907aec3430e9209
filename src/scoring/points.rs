use super::types::Points;
use crate::config::settings::ScoringSettings;

/// Points for a total-goals prediction.
///
/// An exact guess earns `max_points`; every goal of difference costs
/// `points_per_goal_off`, never going below zero.
pub fn derive_points(predicted_total_goals: u32, actual_total_goals: u32, settings: &ScoringSettings) -> Points {
    let goals_off = predicted_total_goals.abs_diff(actual_total_goals);
    let penalty = u64::from(goals_off) * u64::from(settings.points_per_goal_off);

    // A penalty beyond u16 range outweighs any max_points
    let points = match u16::try_from(penalty) {
        Ok(penalty) => settings.max_points.saturating_sub(penalty),
        Err(_) => 0,
    };
    Points::from(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ScoringSettings {
        ScoringSettings::default()
    }

    #[test]
    fn test_exact_match_awards_max() {
        assert_eq!(derive_points(2, 2, &settings()), 10);
        assert_eq!(derive_points(0, 0, &settings()), 10);
    }

    #[test]
    fn test_each_goal_off_costs_step() {
        assert_eq!(derive_points(2, 4, &settings()), 6);
        assert_eq!(derive_points(4, 2, &settings()), 6);
        assert_eq!(derive_points(3, 4, &settings()), 8);
    }

    #[test]
    fn test_floored_at_zero() {
        assert_eq!(derive_points(0, 10, &settings()), 0);
        assert_eq!(derive_points(5, 10, &settings()), 0);
        assert_eq!(derive_points(u32::MAX, 0, &settings()), 0);
    }

    #[test]
    fn test_custom_settings() {
        let settings = ScoringSettings {
            max_points: 5,
            points_per_goal_off: 1,
        };
        assert_eq!(derive_points(1, 3, &settings), 3);
    }

    #[test]
    fn test_largest_settings_keep_exact_points() {
        let settings = ScoringSettings {
            max_points: u16::MAX,
            points_per_goal_off: u16::MAX,
        };
        assert_eq!(derive_points(7, 7, &settings), 65_535);
        assert_eq!(derive_points(7, 8, &settings), 0);
        assert_eq!(derive_points(0, u32::MAX, &settings), 0);

        let gentle = ScoringSettings {
            max_points: u16::MAX,
            points_per_goal_off: 1,
        };
        assert_eq!(derive_points(0, 35, &gentle), 65_500);
    }
}
