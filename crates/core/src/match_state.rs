//! Match state: score, shots remaining, and the current hoop.
//!
//! Created once at game start, mutated exactly once per shot by the game
//! loop, and discarded after the final summary.

use hoopshot_types::Commendation;

use crate::config::GameConfig;
use crate::hoop::{Hoop, HoopSpawner};

#[derive(Debug, Clone)]
pub struct MatchState {
    score: u32,
    shots_left: u32,
    hoop: Hoop,
    spawner: HoopSpawner,
}

impl MatchState {
    /// Start a match with a freshly placed hoop.
    pub fn new(config: &GameConfig, seed: u32) -> Self {
        let mut spawner = HoopSpawner::new(&config.court, seed);
        let hoop = spawner.next_hoop();
        Self {
            score: 0,
            shots_left: config.max_shots,
            hoop,
            spawner,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn shots_left(&self) -> u32 {
        self.shots_left
    }

    pub fn hoop(&self) -> Hoop {
        self.hoop
    }

    /// Terminal once shots remaining reaches zero.
    pub fn is_over(&self) -> bool {
        self.shots_left == 0
    }

    /// Record an animated shot's outcome: a hit increments the score, and
    /// the attempt is consumed either way.
    pub fn resolve_shot(&mut self, scored: bool) {
        if scored {
            self.score += 1;
        }
        self.end_shot();
    }

    /// A missing, invalid, or late entry consumes the attempt without a
    /// chance to score.
    pub fn forfeit_shot(&mut self) {
        self.end_shot();
    }

    fn end_shot(&mut self) {
        self.shots_left = self.shots_left.saturating_sub(1);
        self.hoop = self.spawner.next_hoop();
    }

    /// Commendation tier for the final summary.
    pub fn commendation(&self) -> Commendation {
        match self.score {
            s if s >= 3 => Commendation::Top,
            s if s >= 1 => Commendation::Middle,
            _ => Commendation::Bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match(seed: u32) -> MatchState {
        MatchState::new(&GameConfig::default(), seed)
    }

    #[test]
    fn test_new_match() {
        let state = new_match(12345);
        assert_eq!(state.score(), 0);
        assert_eq!(state.shots_left(), 5);
        assert!(!state.is_over());
    }

    #[test]
    fn test_resolve_hit_increments_score() {
        let mut state = new_match(12345);
        state.resolve_shot(true);
        assert_eq!(state.score(), 1);
        assert_eq!(state.shots_left(), 4);
    }

    #[test]
    fn test_resolve_miss_consumes_shot_only() {
        let mut state = new_match(12345);
        state.resolve_shot(false);
        assert_eq!(state.score(), 0);
        assert_eq!(state.shots_left(), 4);
    }

    #[test]
    fn test_forfeit_cannot_score() {
        let mut state = new_match(12345);
        state.forfeit_shot();
        assert_eq!(state.score(), 0);
        assert_eq!(state.shots_left(), 4);
    }

    #[test]
    fn test_match_ends_after_max_shots() {
        let mut state = new_match(12345);
        for _ in 0..5 {
            assert!(!state.is_over());
            state.resolve_shot(false);
        }
        assert!(state.is_over());

        // Further forfeits must not underflow.
        state.forfeit_shot();
        assert_eq!(state.shots_left(), 0);
    }

    #[test]
    fn test_hoop_rerandomized_each_shot() {
        let mut state = new_match(12345);
        let mut cols = Vec::new();
        for _ in 0..5 {
            cols.push(state.hoop().col());
            state.resolve_shot(false);
        }
        // Five draws from a 17-column range; all identical would mean the
        // spawner is not advancing.
        assert!(cols.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_hoop_always_within_bounds() {
        let config = GameConfig::default();
        let mut state = MatchState::new(&config, 777);
        for _ in 0..5 {
            let hoop = state.hoop();
            assert!(hoop.col() >= config.court.hoop_min_x);
            assert!(hoop.col() <= config.court.hoop_max_x);
            state.forfeit_shot();
        }
    }

    #[test]
    fn test_commendation_tiers() {
        let mut state = new_match(1);
        assert_eq!(state.commendation(), Commendation::Bottom);

        state.resolve_shot(true);
        assert_eq!(state.commendation(), Commendation::Middle);

        state.resolve_shot(true);
        assert_eq!(state.commendation(), Commendation::Middle);

        state.resolve_shot(true);
        assert_eq!(state.commendation(), Commendation::Top);
    }

    #[test]
    fn test_same_seed_same_hoop_sequence() {
        let mut a = new_match(42);
        let mut b = new_match(42);
        for _ in 0..5 {
            assert_eq!(a.hoop(), b.hoop());
            a.resolve_shot(true);
            b.resolve_shot(true);
        }
    }
}
