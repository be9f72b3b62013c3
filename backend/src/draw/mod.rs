//! Draw generation
//!
//! A draw is one random selection of main numbers plus a bonus number.
//!
//! The engine never talks to a random generator directly. It pulls draws
//! from a [`DrawSource`]: the seeded [`DrawGenerator`] in a real run, or
//! [`ScriptedDraws`] when a test needs to know exactly what comes out.

pub mod config;
pub mod generator;
pub mod lottery_draw;
pub mod scripted;

pub use config::{BonusPool, DrawConfig, MAX_POOL_SIZE};
pub use generator::DrawGenerator;
pub use lottery_draw::{LotteryDraw, MatchResult};
pub use scripted::ScriptedDraws;

use thiserror::Error;

/// Errors raised by draw configuration and draw sources
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The draw pool cannot produce the requested draw
    #[error("Invalid draw configuration: {0}")]
    Configuration(String),

    /// A draw value breaks the draw invariants
    #[error("Invalid draw: {0}")]
    InvalidDraw(String),

    /// A scripted source ran out of draws
    #[error("Draw script exhausted")]
    ScriptExhausted,
}

/// Anything that can hand the engine its next draw
///
/// Implementations must return draws whose main numbers are distinct.
/// [`LotteryDraw::new`] enforces that, so any source building draws through
/// it is safe.
pub trait DrawSource {
    /// Produce the next draw
    fn generate(&mut self) -> Result<LotteryDraw, DrawError>;
}
