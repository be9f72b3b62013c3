//! Lottery Simulator Core - Rust Engine
//!
//! Plays one fixed lottery ticket over and over and keeps score: what came
//! out of each draw, what the ticket won, what the player spent, and how long
//! it would have taken to play that many draws for real.
//!
//! # Architecture
//!
//! - **core**: Time management (draws to calendar days)
//! - **models**: Domain types (Ticket, BankAccount, Event)
//! - **draw**: Draw configuration, draw sources and the draw value type
//! - **prize**: Data-driven prize tiers
//! - **lottery**: Engine combining draws, tickets and prizes
//! - **orchestrator**: Session tick loop, statistics and snapshots
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. All randomness is deterministic (seeded RNG)
//! 3. A draw never repeats a main number
//! 4. A draw is paid out at most once
//! 5. `balance == deposits - withdrawals`, exactly, after every tick

// Module declarations
pub mod core;
pub mod draw;
pub mod lottery;
pub mod models;
pub mod orchestrator;
pub mod prize;
pub mod rng;

// Re-exports for convenience
pub use crate::core::time::{ElapsedTime, TimeManager};
pub use draw::{
    BonusPool, DrawConfig, DrawError, DrawGenerator, DrawSource, LotteryDraw, MatchResult,
    ScriptedDraws,
};
pub use lottery::{evaluate, EngineError, LotteryEngine, PlayOutcome};
pub use models::{
    bank_account::{BankAccount, BankError},
    event::{Event, EventLog},
    ticket::{Ticket, TicketError},
};
pub use orchestrator::{
    LotterySession, SessionConfig, SessionSnapshot, SimulationError, TickResult, WinningsTable,
};
pub use prize::{PrizeTable, PrizeTableError, PrizeTier};
pub use rng::RngManager;
