//! Trajectory engine: discretized 2D parabolic flight.
//!
//! Produces the ordered sequence of ball positions for one shot. Grid
//! coordinates: x grows rightward, y grows downward with y = 0 at the top,
//! so launch height is `height - 1` and the ball rises toward smaller y.

use crate::config::CourtConfig;

/// A point in court-grid space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest grid cell as (col, row).
    pub fn rounded(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// An ordered, finite flight path. Immutable once computed; recompute to
/// restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Position>,
}

impl Trajectory {
    pub fn from_points(points: Vec<Position>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Position> {
        self.points.first().copied()
    }
}

/// Compute the flight path for a shot.
///
/// `angle_degrees` is expected in [1, 90] and `power` in [1, 30]; the caller
/// validates ranges, so this never fails. Generation stops, without
/// appending the offending sample, once the ball would leave the court
/// through the bottom or right edge, or once `max_flight_time` elapses.
/// A sample above the top edge is clamped to y = 0 so the ball renders at
/// the top rather than truncating the path. x needs no lower clamp:
/// horizontal velocity is non-negative across the accepted angle range.
pub fn compute_trajectory(angle_degrees: f64, power: f64, config: &CourtConfig) -> Trajectory {
    let angle = angle_degrees.to_radians();
    let velocity_x = power * angle.cos();
    let velocity_y = power * angle.sin();

    let floor = f64::from(config.height - 1);
    let right_edge = f64::from(config.width - 1);

    let mut points = Vec::new();
    let mut t = 0.0;
    while t < config.max_flight_time {
        let x = velocity_x * t;
        let height_above_launch = velocity_y * t - 0.5 * config.gravity * t * t;
        let mut y = floor - height_above_launch;

        if y > floor || x > right_edge {
            break;
        }
        if y < 0.0 {
            y = 0.0;
        }

        points.push(Position::new(x, y));
        t += config.time_step;
    }

    Trajectory { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CourtConfig {
        CourtConfig::default()
    }

    #[test]
    fn test_first_point_is_launch_cell() {
        let trajectory = compute_trajectory(45.0, 20.0, &config());
        assert!(!trajectory.is_empty());

        let first = trajectory.first().unwrap();
        assert!(first.x.abs() < 1e-9);
        assert!((first.y - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_points_inside_court() {
        let config = config();
        let trajectory = compute_trajectory(30.0, 15.0, &config);
        assert!(!trajectory.is_empty());

        for p in trajectory.iter() {
            assert!(p.x >= 0.0 && p.x <= 39.0, "x out of court: {:?}", p);
            assert!(p.y >= 0.0 && p.y <= 14.0, "y out of court: {:?}", p);
        }
    }

    #[test]
    fn test_nonempty_across_valid_input_grid() {
        let config = config();
        for angle in (1..=90).step_by(7) {
            for power in (1..=30).step_by(3) {
                let trajectory = compute_trajectory(f64::from(angle), f64::from(power), &config);
                assert!(
                    !trajectory.is_empty(),
                    "empty trajectory for angle={} power={}",
                    angle,
                    power
                );
                let first = trajectory.first().unwrap();
                assert!(first.x.abs() < 1e-9);
                assert!((first.y - f64::from(config.height - 1)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_high_power_clamps_to_top_edge() {
        // Straight up at maximum power rises well above the court; those
        // samples must clamp to y = 0 instead of disappearing.
        let trajectory = compute_trajectory(90.0, 30.0, &config());
        assert!(trajectory.iter().any(|p| p.y == 0.0));
    }

    #[test]
    fn test_hard_shot_exits_right_edge() {
        // A 45-degree max-power shot stays airborne long enough to cross the
        // whole court; generation must stop at the right edge with the last
        // sample still inside.
        let config = config();
        let trajectory = compute_trajectory(45.0, 30.0, &config);
        let last = trajectory.points().last().copied().unwrap();
        assert!(last.x > f64::from(config.width) / 2.0);
        assert!(last.x <= f64::from(config.width - 1));
    }

    #[test]
    fn test_flat_weak_shot_stops_immediately() {
        // A near-flat shot dips below the launch row within a couple of
        // samples; the path is short but never empty.
        let trajectory = compute_trajectory(1.0, 30.0, &config());
        assert!(!trajectory.is_empty());
        assert!(trajectory.len() <= 3);
    }

    #[test]
    fn test_descending_shot_stops_at_floor() {
        // A weak lob comes back down; generation must stop before any sample
        // passes the bottom edge.
        let config = config();
        let trajectory = compute_trajectory(60.0, 5.0, &config);
        for p in trajectory.iter() {
            assert!(p.y <= f64::from(config.height - 1));
        }
    }

    #[test]
    fn test_x_advances_monotonically() {
        let trajectory = compute_trajectory(40.0, 18.0, &config());
        let points = trajectory.points();
        for pair in points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
    }

    #[test]
    fn test_rounded_maps_to_nearest_cell() {
        assert_eq!(Position::new(25.4, 5.5).rounded(), (25, 6));
        assert_eq!(Position::new(0.0, 14.0).rounded(), (0, 14));
    }

    #[test]
    fn test_recomputation_is_identical() {
        let config = config();
        let a = compute_trajectory(37.0, 22.0, &config);
        let b = compute_trajectory(37.0, 22.0, &config);
        assert_eq!(a, b);
    }
}
