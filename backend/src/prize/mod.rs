//! Prize tiers
//!
//! Payouts are data, not branches: a [`PrizeTable`] is an ordered list of
//! [`PrizeTier`]s and the first tier a result satisfies pays out. Swapping
//! lotteries means swapping the table, the engine never changes.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::draw::{DrawConfig, MatchResult};

/// Errors raised while building a prize table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrizeTableError {
    #[error("Two tiers require {min_main_matches} matches (bonus required: {bonus_required})")]
    DuplicateTier {
        min_main_matches: usize,
        bonus_required: bool,
    },

    #[error("Tier '{name}' has negative payout {payout}")]
    NegativePayout { name: String, payout: i64 },

    #[error("Tier '{name}' needs {min_main_matches} matches but only {numbers_per_draw} numbers are drawn")]
    UnreachableTier {
        name: String,
        min_main_matches: usize,
        numbers_per_draw: usize,
    },
}

/// One prize rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Display name, e.g. "Match 5 + Bonus"
    pub name: String,

    /// Fewest main-number matches that qualify
    pub min_main_matches: usize,

    /// Whether the bonus pick must also match
    #[serde(default)]
    pub bonus_required: bool,

    /// Amount paid per winning ticket (cents)
    pub payout: i64,
}

impl PrizeTier {
    pub fn new(name: &str, min_main_matches: usize, bonus_required: bool, payout: i64) -> Self {
        Self {
            name: name.to_string(),
            min_main_matches,
            bonus_required,
            payout,
        }
    }

    /// Check if a result qualifies for this tier
    pub fn is_satisfied_by(&self, main_matches: usize, bonus_matched: bool) -> bool {
        main_matches >= self.min_main_matches && (bonus_matched || !self.bonus_required)
    }
}

/// Tiers ordered from hardest to easiest to win
///
/// Total over every `(main_matches, bonus_matched)` pair: a pair satisfying no
/// tier pays 0.
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::{PrizeTable, PrizeTier};
///
/// let table = PrizeTable::new(vec![
///     PrizeTier::new("Match 3", 3, false, 3_000),
///     PrizeTier::new("Match 3 + Bonus", 3, true, 10_000),
/// ])
/// .unwrap();
///
/// assert_eq!(table.payout(3, true), 10_000);
/// assert_eq!(table.payout(4, false), 3_000);
/// assert_eq!(table.payout(2, true), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PrizeTier>", into = "Vec<PrizeTier>")]
pub struct PrizeTable {
    tiers: Vec<PrizeTier>,
}

impl PrizeTable {
    /// Build a table from tiers in any order
    pub fn new(mut tiers: Vec<PrizeTier>) -> Result<Self, PrizeTableError> {
        let mut seen = HashSet::new();
        for tier in &tiers {
            if tier.payout < 0 {
                return Err(PrizeTableError::NegativePayout {
                    name: tier.name.clone(),
                    payout: tier.payout,
                });
            }
            if !seen.insert((tier.min_main_matches, tier.bonus_required)) {
                return Err(PrizeTableError::DuplicateTier {
                    min_main_matches: tier.min_main_matches,
                    bonus_required: tier.bonus_required,
                });
            }
        }

        // More matches first; on equal matches the bonus tier comes first.
        tiers.sort_by(|a, b| {
            b.min_main_matches
                .cmp(&a.min_main_matches)
                .then(b.bonus_required.cmp(&a.bonus_required))
        });

        Ok(Self { tiers })
    }

    /// Reject tiers that can never be won under this draw shape
    pub fn validate_for(&self, config: &DrawConfig) -> Result<(), PrizeTableError> {
        match self
            .tiers
            .iter()
            .find(|tier| tier.min_main_matches > config.numbers_per_draw)
        {
            Some(tier) => Err(PrizeTableError::UnreachableTier {
                name: tier.name.clone(),
                min_main_matches: tier.min_main_matches,
                numbers_per_draw: config.numbers_per_draw,
            }),
            None => Ok(()),
        }
    }

    /// Tiers, hardest first
    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    /// Position in [`tiers`](Self::tiers) of the tier a result wins, if any
    pub fn tier_index_for(&self, main_matches: usize, bonus_matched: bool) -> Option<usize> {
        self.tiers
            .iter()
            .position(|tier| tier.is_satisfied_by(main_matches, bonus_matched))
    }

    pub fn tier_for(&self, main_matches: usize, bonus_matched: bool) -> Option<&PrizeTier> {
        self.tier_index_for(main_matches, bonus_matched)
            .map(|index| &self.tiers[index])
    }

    /// Amount won for a result (cents), 0 when no tier applies
    pub fn payout(&self, main_matches: usize, bonus_matched: bool) -> i64 {
        self.tier_for(main_matches, bonus_matched)
            .map_or(0, |tier| tier.payout)
    }

    pub fn payout_for(&self, result: &MatchResult) -> i64 {
        self.payout(result.main_matches, result.bonus_matched)
    }
}

impl Default for PrizeTable {
    /// 6/49 style fixed prizes
    fn default() -> Self {
        Self {
            tiers: vec![
                PrizeTier::new("Jackpot", 6, false, 500_000_000), // $5,000,000
                PrizeTier::new("Match 5 + Bonus", 5, true, 100_000_000), // $1,000,000
                PrizeTier::new("Match 5", 5, false, 175_000), // $1,750
                PrizeTier::new("Match 4", 4, false, 14_000), // $140
                PrizeTier::new("Match 3", 3, false, 3_000), // $30
            ],
        }
    }
}

impl TryFrom<Vec<PrizeTier>> for PrizeTable {
    type Error = PrizeTableError;

    fn try_from(tiers: Vec<PrizeTier>) -> Result<Self, Self::Error> {
        PrizeTable::new(tiers)
    }
}

impl From<PrizeTable> for Vec<PrizeTier> {
    fn from(table: PrizeTable) -> Self {
        table.tiers
    }
}
