//! Orchestrator - the simulation loop
//!
//! A [`LotterySession`] plays one ticket tick after tick and keeps the
//! ledger, statistics and event history that come with it.
//!
//! See `session.rs` for the tick loop and `snapshot.rs` for the observation
//! view handed to displays.

pub mod session;
pub mod snapshot;

// Re-export main types for convenience
pub use session::{
    LotterySession, SessionConfig, SimulationError, TickResult, TierStats, WinningsTable,
};
pub use snapshot::{compute_config_hash, validate_snapshot, SessionSnapshot};
