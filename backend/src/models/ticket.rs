//! Ticket model
//!
//! The numbers a simulated player commits to and plays on every draw.
//!
//! A ticket is immutable. Picking different numbers means building a new
//! `Ticket` and handing it to `LotterySession::replace_ticket`, which resets
//! every accumulated figure so winnings are never evaluated against a ticket
//! they were not earned with.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while building a ticket or checking it against a draw config
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("Ticket must contain at least one number")]
    Empty,

    #[error("Number {0} appears more than once on the ticket")]
    DuplicateNumber(u32),

    #[error("Lottery numbers start at 1, got 0")]
    ZeroNumber,

    #[error("Ticket has {actual} numbers, the lottery draws {expected}")]
    WrongCount { expected: usize, actual: usize },

    #[error("Number {number} is outside the drawable range 1..={max}")]
    NumberOutOfRange { number: u32, max: u32 },

    #[error("Bonus pick {bonus} is outside the bonus range 1..={max}")]
    BonusOutOfRange { bonus: u32, max: u32 },
}

/// A set of distinct numbers plus an optional bonus pick
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::Ticket;
///
/// let ticket = Ticket::new([6, 5, 4, 3, 2, 1], Some(7)).unwrap();
/// assert_eq!(ticket.numbers(), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(ticket.bonus(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicket", into = "RawTicket")]
pub struct Ticket {
    numbers: BTreeSet<u32>,
    bonus: Option<u32>,
}

/// Unchecked wire form, validated through `Ticket::new` on deserialisation
#[derive(Serialize, Deserialize)]
struct RawTicket {
    numbers: Vec<u32>,
    #[serde(default)]
    bonus: Option<u32>,
}

impl Ticket {
    /// Build a ticket, rejecting empty picks, duplicates and zeros
    pub fn new<I>(numbers: I, bonus: Option<u32>) -> Result<Self, TicketError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut set = BTreeSet::new();
        for number in numbers {
            if number == 0 {
                return Err(TicketError::ZeroNumber);
            }
            if !set.insert(number) {
                return Err(TicketError::DuplicateNumber(number));
            }
        }

        if set.is_empty() {
            return Err(TicketError::Empty);
        }
        if bonus == Some(0) {
            return Err(TicketError::ZeroNumber);
        }

        Ok(Self {
            numbers: set,
            bonus,
        })
    }

    /// Picked numbers in ascending order
    pub fn numbers(&self) -> Vec<u32> {
        self.numbers.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }

    /// The bonus pick, if the player declared one
    pub fn bonus(&self) -> Option<u32> {
        self.bonus
    }
}

impl TryFrom<RawTicket> for Ticket {
    type Error = TicketError;

    fn try_from(raw: RawTicket) -> Result<Self, Self::Error> {
        Ticket::new(raw.numbers, raw.bonus)
    }
}

impl From<Ticket> for RawTicket {
    fn from(ticket: Ticket) -> Self {
        RawTicket {
            numbers: ticket.numbers.into_iter().collect(),
            bonus: ticket.bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_rejected() {
        let result = Ticket::new([1, 2, 2, 4, 5, 6], None);
        assert_eq!(result, Err(TicketError::DuplicateNumber(2)));
    }

    #[test]
    fn test_zero_bonus_rejected() {
        let result = Ticket::new([1, 2, 3], Some(0));
        assert_eq!(result, Err(TicketError::ZeroNumber));
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let json = r#"{"numbers":[3,3,4],"bonus":null}"#;
        let result: Result<Ticket, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let ok: Ticket = serde_json::from_str(r#"{"numbers":[9,3,4]}"#).unwrap();
        assert_eq!(ok.numbers(), vec![3, 4, 9]);
        assert_eq!(ok.bonus(), None);
    }
}
