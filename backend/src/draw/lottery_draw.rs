//! Draw value type and ticket matching

use serde::{Deserialize, Serialize};

use super::DrawError;
use crate::models::ticket::Ticket;

/// One draw: distinct main numbers in ascending order plus a bonus number
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::LotteryDraw;
///
/// let draw = LotteryDraw::new(vec![30, 1, 20, 2, 10, 3], 7).unwrap();
/// assert_eq!(draw.numbers(), &[1, 2, 3, 10, 20, 30]);
/// assert_eq!(draw.bonus(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDraw")]
pub struct LotteryDraw {
    numbers: Vec<u32>,
    bonus: u32,
}

#[derive(Deserialize)]
struct RawDraw {
    numbers: Vec<u32>,
    bonus: u32,
}

impl TryFrom<RawDraw> for LotteryDraw {
    type Error = DrawError;

    fn try_from(raw: RawDraw) -> Result<Self, Self::Error> {
        LotteryDraw::new(raw.numbers, raw.bonus)
    }
}

/// How well a ticket did against a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Ticket numbers present in the draw's main numbers
    pub main_matches: usize,

    /// Ticket declared a bonus pick and it equals the drawn bonus
    pub bonus_matched: bool,
}

impl LotteryDraw {
    /// Build a draw, sorting the main numbers
    ///
    /// Fails on an empty draw, a zero, or a repeated main number.
    pub fn new(mut numbers: Vec<u32>, bonus: u32) -> Result<Self, DrawError> {
        if numbers.is_empty() {
            return Err(DrawError::InvalidDraw("no main numbers".to_string()));
        }
        if bonus == 0 || numbers.contains(&0) {
            return Err(DrawError::InvalidDraw("lottery numbers start at 1".to_string()));
        }

        numbers.sort_unstable();
        if let Some(pair) = numbers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DrawError::InvalidDraw(format!(
                "number {} drawn twice",
                pair[0]
            )));
        }

        Ok(Self { numbers, bonus })
    }

    /// Main numbers, ascending
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Compare a ticket against this draw
    pub fn match_ticket(&self, ticket: &Ticket) -> MatchResult {
        let main_matches = self
            .numbers
            .iter()
            .filter(|number| ticket.contains(**number))
            .count();

        MatchResult {
            main_matches,
            bonus_matched: ticket.bonus() == Some(self.bonus),
        }
    }
}
