//! `nbcron-core` — configuration and shared types for the nbcron workspace.
//!
//! The cron engine itself lives in `nbcron-engine` and never reads
//! configuration; callers load an [`NbcronConfig`] here and pass the relevant
//! values (leap-year rule, display time zone) into the engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::{DisplayConfig, EngineConfig, NbcronConfig};
pub use error::{NbcronError, Result};
pub use types::LeapYearRule;
