//! Draw pool configuration

use serde::{Deserialize, Serialize};

use super::{DrawError, LotteryDraw};
use crate::models::ticket::{Ticket, TicketError};

/// Largest main-number pool a generator will hold in memory
pub const MAX_POOL_SIZE: u32 = 1_000_000;

/// Where the bonus ball comes from
///
/// Lotteries disagree on this, so it is a setting rather than a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BonusPool {
    /// Separate machine: bonus drawn from `1..=max`, may repeat a main number
    Independent { max: u32 },

    /// Same machine: bonus drawn from the balls left after the main draw
    Remaining,
}

/// Shape of a single draw
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::draw::{BonusPool, DrawConfig};
///
/// let config = DrawConfig {
///     numbers_per_draw: 6,
///     max_number: 49,
///     bonus_pool: BonusPool::Remaining,
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.bonus_max(), 49);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Main numbers per draw (N)
    pub numbers_per_draw: usize,

    /// Highest main number (MAX), numbers are drawn from `1..=max_number`
    pub max_number: u32,

    pub bonus_pool: BonusPool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            numbers_per_draw: 6,
            max_number: 49,
            bonus_pool: BonusPool::Independent { max: 49 },
        }
    }
}

impl DrawConfig {
    /// Reject pools that cannot produce a valid draw
    pub fn validate(&self) -> Result<(), DrawError> {
        if self.numbers_per_draw == 0 {
            return Err(DrawError::Configuration(
                "numbers_per_draw must be positive".to_string(),
            ));
        }

        if self.max_number > MAX_POOL_SIZE {
            return Err(DrawError::Configuration(format!(
                "max_number {} exceeds the supported pool size {}",
                self.max_number, MAX_POOL_SIZE
            )));
        }

        if self.numbers_per_draw as u64 > u64::from(self.max_number) {
            return Err(DrawError::Configuration(format!(
                "cannot draw {} distinct numbers from 1..={}",
                self.numbers_per_draw, self.max_number
            )));
        }

        match self.bonus_pool {
            BonusPool::Independent { max: 0 } => Err(DrawError::Configuration(
                "bonus pool must contain at least one number".to_string(),
            )),
            BonusPool::Remaining if self.numbers_per_draw as u64 == u64::from(self.max_number) => {
                Err(DrawError::Configuration(format!(
                    "no balls left for the bonus after drawing {} of {}",
                    self.numbers_per_draw, self.max_number
                )))
            }
            _ => Ok(()),
        }
    }

    /// Highest value the bonus ball can take
    pub fn bonus_max(&self) -> u32 {
        match self.bonus_pool {
            BonusPool::Independent { max } => max,
            BonusPool::Remaining => self.max_number,
        }
    }

    /// Check that a ticket can be played in this lottery
    pub fn check_ticket(&self, ticket: &Ticket) -> Result<(), TicketError> {
        if ticket.len() != self.numbers_per_draw {
            return Err(TicketError::WrongCount {
                expected: self.numbers_per_draw,
                actual: ticket.len(),
            });
        }

        if let Some(number) = ticket.numbers().into_iter().find(|n| *n > self.max_number) {
            return Err(TicketError::NumberOutOfRange {
                number,
                max: self.max_number,
            });
        }

        match ticket.bonus() {
            Some(bonus) if bonus > self.bonus_max() => Err(TicketError::BonusOutOfRange {
                bonus,
                max: self.bonus_max(),
            }),
            _ => Ok(()),
        }
    }

    /// Check that a draw could have come out of this pool
    pub fn check_draw(&self, draw: &LotteryDraw) -> Result<(), DrawError> {
        if draw.numbers().len() != self.numbers_per_draw {
            return Err(DrawError::InvalidDraw(format!(
                "expected {} numbers, got {}",
                self.numbers_per_draw,
                draw.numbers().len()
            )));
        }

        if let Some(number) = draw.numbers().iter().find(|n| **n > self.max_number) {
            return Err(DrawError::InvalidDraw(format!(
                "number {} outside 1..={}",
                number, self.max_number
            )));
        }

        if draw.bonus() > self.bonus_max() {
            return Err(DrawError::InvalidDraw(format!(
                "bonus {} outside 1..={}",
                draw.bonus(),
                self.bonus_max()
            )));
        }

        if self.bonus_pool == BonusPool::Remaining && draw.contains(draw.bonus()) {
            return Err(DrawError::InvalidDraw(format!(
                "bonus {} repeats a main number",
                draw.bonus()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_numbers_than_pool_rejected() {
        let config = DrawConfig {
            numbers_per_draw: 7,
            max_number: 6,
            bonus_pool: BonusPool::Independent { max: 10 },
        };

        assert!(matches!(config.validate(), Err(DrawError::Configuration(_))));
    }

    #[test]
    fn test_oversized_pool_rejected() {
        let config = DrawConfig {
            numbers_per_draw: 6,
            max_number: u32::MAX,
            bonus_pool: BonusPool::Independent { max: 49 },
        };
        assert!(matches!(config.validate(), Err(DrawError::Configuration(_))));

        let largest = DrawConfig {
            max_number: MAX_POOL_SIZE,
            ..config
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_remaining_bonus_needs_spare_ball() {
        let config = DrawConfig {
            numbers_per_draw: 6,
            max_number: 6,
            bonus_pool: BonusPool::Remaining,
        };
        assert!(config.validate().is_err());

        let independent = DrawConfig {
            bonus_pool: BonusPool::Independent { max: 3 },
            ..config
        };
        assert!(independent.validate().is_ok());
    }

    #[test]
    fn test_bonus_pool_deserializes_from_tagged_json() {
        let config: DrawConfig = serde_json::from_str(
            r#"{"numbers_per_draw":5,"max_number":50,"bonus_pool":{"type":"Independent","max":12}}"#,
        )
        .unwrap();

        assert_eq!(config.bonus_pool, BonusPool::Independent { max: 12 });
        assert_eq!(config.bonus_max(), 12);
    }
}
