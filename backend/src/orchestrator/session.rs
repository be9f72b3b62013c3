//! Lottery Session
//!
//! Ties one ticket to one engine and one bank account and drives the tick
//! loop:
//!
//! ```text
//! For each tick t:
//! 1. Withdraw the ticket price
//! 2. Draw
//! 3. Validate the ticket against the draw
//! 4. Deposit the payout
//! 5. Record statistics and events
//! 6. Advance time
//! ```
//!
//! A tick is all-or-nothing. Ledger changes are staged on a copy of the
//! account and committed only once every step has succeeded; the engine's
//! latest draw and winnings are rolled back if any step fails. A failed tick
//! halts the session until [`LotterySession::reset`] is called, so a driver
//! that keeps ticking after an error gets `Halted` instead of a wrong balance.
//!
//! # Example
//!
//! ```rust
//! use lottery_simulator_core_rs::{LotterySession, SessionConfig, Ticket};
//!
//! let ticket = Ticket::new([4, 8, 15, 16, 23, 42], Some(7)).unwrap();
//! let mut session = LotterySession::new(SessionConfig::default(), ticket).unwrap();
//!
//! for _ in 0..52 {
//!     session.tick().unwrap();
//! }
//!
//! assert_eq!(session.ticks(), 52);
//! assert_eq!(session.elapsed().years, 0);
//! assert_eq!(session.elapsed().weeks, 52);
//! assert_eq!(session.balance(), session.total_winnings() - session.total_spent());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::time::{ElapsedTime, TimeManager};
use crate::draw::{DrawConfig, DrawError, DrawGenerator, DrawSource, LotteryDraw};
use crate::lottery::{EngineError, LotteryEngine, PlayOutcome};
use crate::models::bank_account::{BankAccount, BankError};
use crate::models::event::{Event, EventLog};
use crate::models::ticket::{Ticket, TicketError};
use crate::orchestrator::snapshot::{compute_config_hash, SessionSnapshot};
use crate::prize::{PrizeTable, PrizeTableError};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete session configuration
///
/// Every field has a default, so a JSON config only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Shape of each draw
    pub draw: DrawConfig,

    /// Payout rules
    pub prize_table: PrizeTable,

    /// Cost of one ticket (cents)
    pub ticket_price: i64,

    /// Seed for the draw generator
    pub rng_seed: u64,

    /// Calendar days between draws (7 = weekly)
    pub days_per_draw: u64,

    /// Most recent events kept in the event log, 0 disables the log
    pub event_log_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            draw: DrawConfig::default(),
            prize_table: PrizeTable::default(),
            ticket_price: 200, // $2.00
            rng_seed: 1,
            days_per_draw: 7,
            event_log_limit: 10_000,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: SessionConfig = serde_json::from_str(json)
            .map_err(|e| SimulationError::Serialization(format!("Config parse failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.draw.validate()?;
        self.prize_table.validate_for(&self.draw)?;

        if self.ticket_price < 0 {
            return Err(SimulationError::Configuration(format!(
                "ticket_price must not be negative, got {}",
                self.ticket_price
            )));
        }

        if self.days_per_draw == 0 {
            return Err(SimulationError::Configuration(
                "days_per_draw must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Results and Errors
// ============================================================================

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// Zero-based index of this play
    pub tick: u64,

    pub draw: LotteryDraw,

    pub main_matches: usize,

    pub bonus_matched: bool,

    /// Name of the tier won, None for a losing play
    pub tier: Option<String>,

    /// Won by this play (cents)
    pub payout: i64,

    /// Account balance after this play (cents)
    pub balance: i64,

    /// Winnings since the last reset, this play included (cents)
    pub total_winnings: i64,
}

impl TickResult {
    /// Net effect of this play on the balance
    pub fn net(&self, ticket_price: i64) -> i64 {
        self.payout - ticket_price
    }
}

/// Simulation error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    Configuration(String),

    #[error("Invalid ticket: {0}")]
    Ticket(#[from] TicketError),

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("Invalid prize table: {0}")]
    PrizeTable(#[from] PrizeTableError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Ledger error: {0}")]
    Bank(#[from] BankError),

    #[error("Session halted after a failed tick; reset before playing again")]
    Halted,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("State validation failed: {0}")]
    StateValidation(String),
}

// ============================================================================
// Statistics
// ============================================================================

/// Hit count for one prize tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStats {
    pub name: String,
    pub payout: i64,
    pub hits: u64,
    pub total_won: i64,
}

/// How often each tier was won since the last reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningsTable {
    /// Same order as `PrizeTable::tiers()`
    pub tiers: Vec<TierStats>,

    /// Plays that won nothing
    pub losing_plays: u64,
}

impl WinningsTable {
    pub fn new(prize_table: &PrizeTable) -> Self {
        Self {
            tiers: prize_table
                .tiers()
                .iter()
                .map(|tier| TierStats {
                    name: tier.name.clone(),
                    payout: tier.payout,
                    hits: 0,
                    total_won: 0,
                })
                .collect(),
            losing_plays: 0,
        }
    }

    /// Count one settled play
    pub fn record(&mut self, outcome: &PlayOutcome) {
        match outcome.tier.and_then(|index| self.tiers.get_mut(index)) {
            Some(stats) => {
                stats.hits += 1;
                stats.total_won = stats.total_won.saturating_add(outcome.payout);
            }
            None => self.losing_plays += 1,
        }
    }

    /// Plays that won any tier
    pub fn winning_plays(&self) -> u64 {
        self.tiers.iter().map(|stats| stats.hits).sum()
    }

    pub fn total_plays(&self) -> u64 {
        self.winning_plays() + self.losing_plays
    }

    pub fn hits_for(&self, name: &str) -> u64 {
        self.tiers
            .iter()
            .find(|stats| stats.name == name)
            .map_or(0, |stats| stats.hits)
    }
}

// ============================================================================
// Session
// ============================================================================

/// One ticket, one engine, one bank account
///
/// The ticket can only change through [`replace_ticket`](Self::replace_ticket),
/// which resets everything first.
pub struct LotterySession {
    /// Changes whenever the ticket changes
    id: Uuid,

    config: SessionConfig,

    ticket: Ticket,

    engine: LotteryEngine,

    bank: BankAccount,

    time_manager: TimeManager,

    winnings_table: WinningsTable,

    event_log: EventLog,

    /// Set by a failed tick, cleared by reset
    halted: bool,
}

impl LotterySession {
    /// Create a session drawing from a seeded [`DrawGenerator`]
    pub fn new(config: SessionConfig, ticket: Ticket) -> Result<Self, SimulationError> {
        let generator = DrawGenerator::new(config.draw.clone(), config.rng_seed)?;
        Self::with_draw_source(config, ticket, Box::new(generator))
    }

    /// Create a session around any draw source
    ///
    /// `rng_seed` is ignored here; the source decides what gets drawn.
    pub fn with_draw_source(
        config: SessionConfig,
        ticket: Ticket,
        source: Box<dyn DrawSource>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        config.draw.check_ticket(&ticket)?;

        let engine = LotteryEngine::new(source, config.prize_table.clone(), config.ticket_price)?;
        let winnings_table = WinningsTable::new(engine.prize_table());
        let id = Uuid::new_v4();

        tracing::info!(session_id = %id, numbers = ?ticket.numbers(), bonus = ?ticket.bonus(), "session created");

        Ok(Self {
            id,
            time_manager: TimeManager::new(config.days_per_draw),
            event_log: EventLog::new(config.event_log_limit),
            bank: BankAccount::new(),
            config,
            ticket,
            engine,
            winnings_table,
            halted: false,
        })
    }

    // ========================================================================
    // Tick Loop
    // ========================================================================

    /// Play the ticket once
    ///
    /// # Returns
    ///
    /// * `Ok(TickResult)` - the play was fully applied
    /// * `Err(SimulationError)` - nothing was applied to the ledger and the
    ///   session is halted
    pub fn tick(&mut self) -> Result<TickResult, SimulationError> {
        if self.halted {
            return Err(SimulationError::Halted);
        }

        let saved = self.engine.save_state();
        match self.play_once() {
            Ok(result) => Ok(result),
            Err(e) => {
                self.engine.restore_state(saved);
                self.halted = true;
                tracing::warn!(session_id = %self.id, tick = self.ticks(), error = %e, "session halted");
                Err(e)
            }
        }
    }

    /// Play `ticks` times, stopping at the first error
    pub fn run(&mut self, ticks: u64) -> Result<(), SimulationError> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    fn play_once(&mut self) -> Result<TickResult, SimulationError> {
        let tick = self.time_manager.current_tick();
        let price = self.engine.ticket_price();

        // STEP 1: WITHDRAW (staged)
        let mut bank = self.bank.clone();
        bank.withdraw(price)?;
        let balance_after_purchase = bank.balance();

        // STEP 2: DRAW
        let draw = self.engine.draw()?.clone();

        // STEP 3: VALIDATE
        let outcome = self.engine.settle_ticket(&self.ticket)?;

        // STEP 4: DEPOSIT (staged)
        bank.deposit(outcome.payout)?;

        // Commit
        self.bank = bank;
        self.winnings_table.record(&outcome);
        self.time_manager.advance_tick();

        let tier = outcome
            .tier
            .map(|index| self.engine.prize_table().tiers()[index].name.clone());

        self.log_play(tick, price, balance_after_purchase, &draw, &outcome, tier.clone());

        tracing::debug!(
            tick,
            main_matches = outcome.result.main_matches,
            bonus_matched = outcome.result.bonus_matched,
            payout = outcome.payout,
            balance = self.bank.balance(),
            "tick played"
        );

        Ok(TickResult {
            tick,
            draw,
            main_matches: outcome.result.main_matches,
            bonus_matched: outcome.result.bonus_matched,
            tier,
            payout: outcome.payout,
            balance: self.bank.balance(),
            total_winnings: self.engine.total_winnings(),
        })
    }

    fn log_play(
        &mut self,
        tick: u64,
        price: i64,
        balance_after_purchase: i64,
        draw: &LotteryDraw,
        outcome: &PlayOutcome,
        tier: Option<String>,
    ) {
        self.event_log.log(Event::TicketPurchased {
            tick,
            price,
            balance_after: balance_after_purchase,
        });
        self.event_log.log(Event::DrawCompleted {
            tick,
            numbers: draw.numbers().to_vec(),
            bonus: draw.bonus(),
        });
        self.event_log.log(Event::TicketSettled {
            tick,
            main_matches: outcome.result.main_matches,
            bonus_matched: outcome.result.bonus_matched,
            tier,
            payout: outcome.payout,
        });
        self.event_log.log(Event::WinningsDeposited {
            tick,
            amount: outcome.payout,
            balance_after: self.bank.balance(),
        });
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Clear every accumulated figure, keep the ticket
    pub fn reset(&mut self) {
        let ticks_discarded = self.time_manager.current_tick();

        self.engine.reset();
        self.bank.reset();
        self.time_manager.reset();
        self.winnings_table = WinningsTable::new(self.engine.prize_table());
        self.event_log.clear();
        self.halted = false;

        self.event_log.log(Event::SessionReset {
            tick: 0,
            ticks_discarded,
        });

        tracing::info!(session_id = %self.id, ticks_discarded, "session reset");
    }

    /// Switch to a different ticket
    ///
    /// The ticket is checked first; on error the session is left untouched.
    /// On success the session is reset and gets a new id.
    pub fn replace_ticket(&mut self, ticket: Ticket) -> Result<(), SimulationError> {
        self.config.draw.check_ticket(&ticket)?;

        self.reset();
        self.id = Uuid::new_v4();
        self.event_log.log(Event::TicketReplaced {
            tick: 0,
            numbers: ticket.numbers(),
            bonus: ticket.bonus(),
        });
        self.ticket = ticket;

        tracing::info!(session_id = %self.id, numbers = ?self.ticket.numbers(), "ticket replaced");
        Ok(())
    }

    // ========================================================================
    // Observations
    // ========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    /// None before the first tick and after a reset
    pub fn latest_draw(&self) -> Option<&LotteryDraw> {
        self.engine.latest_draw()
    }

    pub fn total_winnings(&self) -> i64 {
        self.engine.total_winnings()
    }

    pub fn ticket_price(&self) -> i64 {
        self.engine.ticket_price()
    }

    pub fn balance(&self) -> i64 {
        self.bank.balance()
    }

    pub fn bank(&self) -> &BankAccount {
        &self.bank
    }

    /// Plays since the last reset
    pub fn ticks(&self) -> u64 {
        self.time_manager.current_tick()
    }

    /// Spent on tickets since the last reset (cents)
    pub fn total_spent(&self) -> i64 {
        self.bank.total_withdrawn()
    }

    pub fn elapsed(&self) -> ElapsedTime {
        self.time_manager.elapsed()
    }

    pub fn winnings_table(&self) -> &WinningsTable {
        &self.winnings_table
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Hash identifying this config + ticket pair
    pub fn ticket_fingerprint(&self) -> Result<String, SimulationError> {
        #[derive(Serialize)]
        struct Fingerprint<'a> {
            config: &'a SessionConfig,
            ticket: &'a Ticket,
        }

        compute_config_hash(&Fingerprint {
            config: &self.config,
            ticket: &self.ticket,
        })
    }

    /// Capture every observable figure
    pub fn snapshot(&self) -> Result<SessionSnapshot, SimulationError> {
        Ok(SessionSnapshot {
            session_id: self.id,
            ticket_fingerprint: self.ticket_fingerprint()?,
            ticket: self.ticket.clone(),
            ticks: self.ticks(),
            elapsed: self.elapsed(),
            ticket_price: self.ticket_price(),
            latest_draw: self.latest_draw().cloned(),
            total_winnings: self.total_winnings(),
            total_spent: self.total_spent(),
            balance: self.balance(),
            lowest_balance: self.bank.lowest_balance(),
            winnings_table: self.winnings_table.clone(),
            halted: self.halted,
        })
    }
}

impl std::fmt::Debug for LotterySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LotterySession")
            .field("id", &self.id)
            .field("ticket", &self.ticket)
            .field("ticks", &self.ticks())
            .field("balance", &self.balance())
            .field("total_winnings", &self.total_winnings())
            .field("halted", &self.halted)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
