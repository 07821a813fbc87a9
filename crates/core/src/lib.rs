//! Core game logic — pure, deterministic, and testable.
//!
//! This crate holds everything the shootout needs that is not I/O: the
//! trajectory engine, the scoring evaluator, hoop placement, and match
//! state. It has **zero dependencies** on the terminal, audio, or timing,
//! so the same code runs under unit tests, integration tests, and benches.
//!
//! # Module Structure
//!
//! - [`config`]: immutable court/match configuration passed explicitly
//! - [`trajectory`]: discretized parabolic flight under gravity
//! - [`scoring`]: trajectory-vs-hoop intersection test
//! - [`hoop`]: the 3-cell target and its randomized per-shot placement
//! - [`match_state`]: score, shots remaining, current hoop
//! - [`rng`]: seeded LCG behind hoop placement
//!
//! # Example
//!
//! ```
//! use hoopshot_core::{compute_trajectory, is_scored, CourtConfig, Hoop};
//!
//! let config = CourtConfig::default();
//! let flight = compute_trajectory(45.0, 20.0, &config);
//! assert!(!flight.is_empty());
//!
//! // Whether it scores depends on where the hoop happens to be.
//! let _hit = is_scored(&flight, Hoop::new(25), &config);
//! ```

pub mod config;
pub mod hoop;
pub mod match_state;
pub mod rng;
pub mod scoring;
pub mod trajectory;

pub use config::{CourtConfig, GameConfig};
pub use hoop::{Hoop, HoopSpawner};
pub use match_state::MatchState;
pub use rng::SimpleRng;
pub use scoring::is_scored;
pub use trajectory::{compute_trajectory, Position, Trajectory};
