//! Immutable configuration passed to the trajectory engine, the renderer,
//! and the game loop. Replaces ambient globals: every tunable is read once
//! at startup and carried explicitly.

use std::time::Duration;

use hoopshot_types::{
    COURT_HEIGHT, COURT_WIDTH, FORFEIT_PAUSE_MS, FRAME_DELAY_MS, GRAVITY, HOOP_MAX_X, HOOP_MIN_X,
    HOOP_ROW, HOOP_SPAN, MAX_FLIGHT_TIME, MAX_SHOTS, RESULT_PAUSE_MS, SHOT_TIMEOUT_SECS, TIME_STEP,
};

/// Court geometry and physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Fixed row the hoop occupies.
    pub hoop_row: u16,
    /// Inclusive bounds for the hoop's randomized start column.
    pub hoop_min_x: u16,
    pub hoop_max_x: u16,
    /// Downward acceleration applied to the ball.
    pub gravity: f64,
    /// Simulation time step in seconds.
    pub time_step: f64,
    /// Maximum simulated flight time in seconds.
    pub max_flight_time: f64,
}

impl CourtConfig {
    /// The hoop span must lie fully within horizontal court bounds for every
    /// legal start column.
    pub fn hoop_fits(&self) -> bool {
        self.hoop_min_x < self.hoop_max_x && self.hoop_max_x + HOOP_SPAN <= self.width
    }
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_HEIGHT,
            hoop_row: HOOP_ROW,
            hoop_min_x: HOOP_MIN_X,
            hoop_max_x: HOOP_MAX_X,
            gravity: GRAVITY,
            time_step: TIME_STEP,
            max_flight_time: MAX_FLIGHT_TIME,
        }
    }
}

/// Match shape and pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub court: CourtConfig,
    /// Total attempts per match.
    pub max_shots: u32,
    /// Budget for each angle/power entry.
    pub shot_timeout: Duration,
    /// Sleep between animation frames.
    pub frame_delay: Duration,
    /// Pause on the hit/miss message.
    pub result_pause: Duration,
    /// Pause on a forfeit message.
    pub forfeit_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            court: CourtConfig::default(),
            max_shots: MAX_SHOTS,
            shot_timeout: Duration::from_secs(SHOT_TIMEOUT_SECS),
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            result_pause: Duration::from_millis(RESULT_PAUSE_MS),
            forfeit_pause: Duration::from_millis(FORFEIT_PAUSE_MS),
        }
    }
}
