//! Seeded random draw generator

use super::{BonusPool, DrawConfig, DrawError, DrawSource, LotteryDraw};
use crate::rng::RngManager;

/// Draws numbers uniformly and without replacement from the configured pool
///
/// Knows nothing about tickets or history: every call is an independent draw.
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::draw::{DrawConfig, DrawGenerator, DrawSource};
///
/// let mut generator = DrawGenerator::new(DrawConfig::default(), 42).unwrap();
/// let draw = generator.generate().unwrap();
/// assert_eq!(draw.numbers().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct DrawGenerator {
    config: DrawConfig,
    rng: RngManager,
    /// Scratch copy of `1..=max_number`, reshuffled in place each draw
    pool: Vec<u32>,
}

impl DrawGenerator {
    /// Create a generator, failing fast on an impossible pool
    pub fn new(config: DrawConfig, seed: u64) -> Result<Self, DrawError> {
        config.validate()?;

        let pool = (1..=config.max_number).collect();
        Ok(Self {
            config,
            rng: RngManager::new(seed),
            pool,
        })
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }
}

impl DrawSource for DrawGenerator {
    fn generate(&mut self) -> Result<LotteryDraw, DrawError> {
        let count = self.config.numbers_per_draw;
        let numbers = self.rng.sample_distinct(&mut self.pool, count);

        let bonus = match self.config.bonus_pool {
            BonusPool::Independent { max } => self.rng.range_inclusive(1, max),
            BonusPool::Remaining => {
                // Everything past `count` is still in the machine.
                let left = &self.pool[count..];
                left[self.rng.below(left.len() as u64) as usize]
            }
        };

        tracing::trace!(?numbers, bonus, "draw generated");
        LotteryDraw::new(numbers, bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impossible_pool_fails_fast() {
        let config = DrawConfig {
            numbers_per_draw: 10,
            max_number: 9,
            bonus_pool: BonusPool::Independent { max: 9 },
        };

        assert!(matches!(
            DrawGenerator::new(config, 1),
            Err(DrawError::Configuration(_))
        ));
    }

    #[test]
    fn test_full_pool_draw_uses_every_number() {
        let config = DrawConfig {
            numbers_per_draw: 5,
            max_number: 5,
            bonus_pool: BonusPool::Independent { max: 2 },
        };
        let mut generator = DrawGenerator::new(config, 77).unwrap();

        let draw = generator.generate().unwrap();

        assert_eq!(draw.numbers(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_remaining_bonus_never_repeats_main_number() {
        let config = DrawConfig {
            numbers_per_draw: 6,
            max_number: 7,
            bonus_pool: BonusPool::Remaining,
        };
        let mut generator = DrawGenerator::new(config.clone(), 3).unwrap();

        for _ in 0..200 {
            let draw = generator.generate().unwrap();
            assert!(!draw.contains(draw.bonus()));
            assert!(config.check_draw(&draw).is_ok());
        }
    }
}
