//! Scripted draw source for deterministic scenarios

use std::collections::VecDeque;

use super::{DrawConfig, DrawError, DrawSource, LotteryDraw};

/// Replays a fixed list of draws in order
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::draw::{DrawSource, LotteryDraw, ScriptedDraws};
///
/// let mut source = ScriptedDraws::new(vec![LotteryDraw::new(vec![1, 2, 3], 4).unwrap()]);
/// assert_eq!(source.generate().unwrap().bonus(), 4);
/// assert!(source.generate().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    queue: VecDeque<LotteryDraw>,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<LotteryDraw>) -> Self {
        Self {
            queue: draws.into(),
        }
    }

    /// Like `new`, but every draw must fit the given pool
    pub fn for_config(config: &DrawConfig, draws: Vec<LotteryDraw>) -> Result<Self, DrawError> {
        config.validate()?;
        for draw in &draws {
            config.check_draw(draw)?;
        }
        Ok(Self::new(draws))
    }

    /// Draws still queued
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn generate(&mut self) -> Result<LotteryDraw, DrawError> {
        self.queue.pop_front().ok_or(DrawError::ScriptExhausted)
    }
}
