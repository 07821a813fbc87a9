//! Scoring evaluator: does a trajectory pass through the hoop?

use crate::config::CourtConfig;
use crate::hoop::Hoop;
use crate::trajectory::Trajectory;

/// True when any sampled position, rounded to its nearest grid cell, lands
/// on the hoop row inside the hoop's 3-cell span. Short-circuits on the
/// first match. Pure and deterministic.
pub fn is_scored(trajectory: &Trajectory, hoop: Hoop, config: &CourtConfig) -> bool {
    trajectory.iter().any(|p| {
        let (col, row) = p.rounded();
        row == i64::from(config.hoop_row) && hoop.contains_col(col)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Position;

    fn trajectory(points: &[(f64, f64)]) -> Trajectory {
        Trajectory::from_points(points.iter().map(|&(x, y)| Position::new(x, y)).collect())
    }

    #[test]
    fn test_direct_hit_scores() {
        let t = trajectory(&[(25.0, 5.0), (26.0, 5.0), (27.0, 5.0)]);
        assert!(is_scored(&t, Hoop::new(25), &CourtConfig::default()));
    }

    #[test]
    fn test_near_misses_do_not_score() {
        // One short, one long, one on the right column but wrong row.
        let t = trajectory(&[(24.0, 5.0), (28.0, 5.0), (25.0, 6.0)]);
        assert!(!is_scored(&t, Hoop::new(25), &CourtConfig::default()));
    }

    #[test]
    fn test_rounding_pulls_into_span() {
        // 24.6 rounds to 25, 4.8 rounds to 5: a hit despite fractional
        // coordinates.
        let t = trajectory(&[(24.6, 4.8)]);
        assert!(is_scored(&t, Hoop::new(25), &CourtConfig::default()));
    }

    #[test]
    fn test_rounding_pushes_out_of_span() {
        // 24.4 rounds to 24, one column short.
        let t = trajectory(&[(24.4, 5.0)]);
        assert!(!is_scored(&t, Hoop::new(25), &CourtConfig::default()));
    }

    #[test]
    fn test_any_single_position_suffices() {
        let t = trajectory(&[(0.0, 14.0), (10.0, 9.0), (26.0, 5.2), (33.0, 8.0)]);
        assert!(is_scored(&t, Hoop::new(25), &CourtConfig::default()));
    }

    #[test]
    fn test_empty_trajectory_never_scores() {
        let t = trajectory(&[]);
        assert!(!is_scored(&t, Hoop::new(25), &CourtConfig::default()));
    }
}
