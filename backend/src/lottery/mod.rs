//! Lottery engine - one draw, one ticket evaluation, running winnings

pub mod engine;

pub use engine::{evaluate, EngineError, LotteryEngine, PlayOutcome};
