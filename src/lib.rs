//! Hoopshot (workspace facade crate).
//!
//! This package exposes the `hoopshot::{core,term,input,audio,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use hoopshot_audio as audio;
pub use hoopshot_core as core;
pub use hoopshot_input as input;
pub use hoopshot_term as term;
pub use hoopshot_types as types;
