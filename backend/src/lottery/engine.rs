//! Lottery Engine
//!
//! Owns the draw source, the prize table and the winnings counter.
//!
//! ```text
//! draw()             -> pull a draw from the source, replace latest_draw
//! validate_ticket(t) -> match t against latest_draw, look up payout,
//!                       add it to total_winnings, return it
//! ```
//!
//! Each draw can be settled exactly once. Drawing again without settling
//! simply discards the unsettled draw; only the latest draw is ever evaluated.

use thiserror::Error;

use crate::draw::{DrawError, DrawSource, LotteryDraw, MatchResult};
use crate::models::ticket::Ticket;
use crate::prize::PrizeTable;

/// Errors raised by the engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A ticket was validated before anything was drawn
    #[error("No draw yet: call draw() before validating a ticket")]
    NoDrawYet,

    /// The latest draw was already paid out
    #[error("Latest draw has already been settled")]
    DrawAlreadySettled,

    #[error("Invalid engine configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("Total winnings overflowed")]
    WinningsOverflow,
}

/// Everything known about one settled play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub result: MatchResult,

    /// Index into `PrizeTable::tiers()` of the tier won, None for a losing play
    pub tier: Option<usize>,

    /// Amount won by this play alone (cents)
    pub payout: i64,
}

/// Match a ticket against a draw without touching any engine state
pub fn evaluate(ticket: &Ticket, draw: &LotteryDraw) -> MatchResult {
    draw.match_ticket(ticket)
}

/// Latest draw and winnings, saved so a failed session tick can be rolled back
#[derive(Debug, Clone)]
pub(crate) struct EngineState {
    latest_draw: Option<LotteryDraw>,
    latest_settled: bool,
    total_winnings: i64,
}

/// Draws numbers and pays out tickets
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::draw::{LotteryDraw, ScriptedDraws};
/// use lottery_simulator_core_rs::{LotteryEngine, PrizeTable, Ticket};
///
/// let source = ScriptedDraws::new(vec![LotteryDraw::new(vec![1, 2, 3, 4, 5, 6], 7).unwrap()]);
/// let mut engine = LotteryEngine::new(Box::new(source), PrizeTable::default(), 200).unwrap();
/// let ticket = Ticket::new([1, 2, 3, 40, 41, 42], None).unwrap();
///
/// engine.draw().unwrap();
/// assert_eq!(engine.validate_ticket(&ticket).unwrap(), 3_000);
/// assert_eq!(engine.total_winnings(), 3_000);
/// ```
pub struct LotteryEngine {
    source: Box<dyn DrawSource>,

    prize_table: PrizeTable,

    /// Cost of one ticket (cents)
    ticket_price: i64,

    /// None until the first draw, replaced on every draw
    latest_draw: Option<LotteryDraw>,

    /// Whether `latest_draw` has been paid out
    latest_settled: bool,

    /// Sum of payouts since the last reset (cents)
    total_winnings: i64,
}

impl LotteryEngine {
    /// Create an engine around an injected draw source
    pub fn new(
        source: Box<dyn DrawSource>,
        prize_table: PrizeTable,
        ticket_price: i64,
    ) -> Result<Self, EngineError> {
        if ticket_price < 0 {
            return Err(EngineError::Configuration(format!(
                "ticket_price must not be negative, got {}",
                ticket_price
            )));
        }

        Ok(Self {
            source,
            prize_table,
            ticket_price,
            latest_draw: None,
            latest_settled: false,
            total_winnings: 0,
        })
    }

    /// Pull the next draw and make it the latest
    ///
    /// If the source fails, the previous draw stays in place.
    pub fn draw(&mut self) -> Result<&LotteryDraw, EngineError> {
        let draw = self.source.generate()?;
        self.latest_settled = false;
        Ok(&*self.latest_draw.insert(draw))
    }

    /// Pay out `ticket` against the latest draw and return this play's payout
    pub fn validate_ticket(&mut self, ticket: &Ticket) -> Result<i64, EngineError> {
        self.settle_ticket(ticket).map(|outcome| outcome.payout)
    }

    /// Same as [`validate_ticket`](Self::validate_ticket), keeping the match details
    pub fn settle_ticket(&mut self, ticket: &Ticket) -> Result<PlayOutcome, EngineError> {
        let draw = self.latest_draw.as_ref().ok_or(EngineError::NoDrawYet)?;
        if self.latest_settled {
            return Err(EngineError::DrawAlreadySettled);
        }

        let result = evaluate(ticket, draw);
        let tier = self
            .prize_table
            .tier_index_for(result.main_matches, result.bonus_matched);
        let payout = tier.map_or(0, |index| self.prize_table.tiers()[index].payout);

        self.total_winnings = self
            .total_winnings
            .checked_add(payout)
            .ok_or(EngineError::WinningsOverflow)?;
        self.latest_settled = true;

        Ok(PlayOutcome {
            result,
            tier,
            payout,
        })
    }

    pub fn latest_draw(&self) -> Option<&LotteryDraw> {
        self.latest_draw.as_ref()
    }

    pub fn total_winnings(&self) -> i64 {
        self.total_winnings
    }

    pub fn ticket_price(&self) -> i64 {
        self.ticket_price
    }

    pub fn prize_table(&self) -> &PrizeTable {
        &self.prize_table
    }

    pub(crate) fn save_state(&self) -> EngineState {
        EngineState {
            latest_draw: self.latest_draw.clone(),
            latest_settled: self.latest_settled,
            total_winnings: self.total_winnings,
        }
    }

    /// Put back a saved state; the draw source is not rewound
    pub(crate) fn restore_state(&mut self, state: EngineState) {
        self.latest_draw = state.latest_draw;
        self.latest_settled = state.latest_settled;
        self.total_winnings = state.total_winnings;
    }

    /// Forget the latest draw and zero the winnings
    ///
    /// The draw source keeps its position: a reset session continues with
    /// fresh draws rather than replaying old ones.
    pub fn reset(&mut self) {
        self.latest_draw = None;
        self.latest_settled = false;
        self.total_winnings = 0;
    }
}

// Manual Debug implementation (draw sources don't implement Debug)
impl std::fmt::Debug for LotteryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LotteryEngine")
            .field("ticket_price", &self.ticket_price)
            .field("latest_draw", &self.latest_draw)
            .field("latest_settled", &self.latest_settled)
            .field("total_winnings", &self.total_winnings)
            .finish()
    }
}
