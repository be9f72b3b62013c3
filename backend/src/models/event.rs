//! Event logging for auditing a simulated session.
//!
//! Every step of a tick leaves an event behind, so the ledger can be
//! reconciled play by play:
//! - **TicketPurchased**: ticket price withdrawn
//! - **DrawCompleted**: numbers drawn
//! - **TicketSettled**: ticket matched and prize looked up
//! - **WinningsDeposited**: payout credited
//! - **SessionReset** / **TicketReplaced**: lifecycle
//!
//! The log keeps only the most recent events; a session running for millions
//! of draws would otherwise hold its whole history in memory.
//!
//! # Example
//!
//! ```rust
//! use lottery_simulator_core_rs::models::{Event, EventLog};
//!
//! let mut log = EventLog::new(2);
//! log.log(Event::TicketPurchased { tick: 0, price: 200, balance_after: -200 });
//! log.log(Event::DrawCompleted { tick: 0, numbers: vec![1, 2, 3, 4, 5, 6], bonus: 7 });
//! log.log(Event::WinningsDeposited { tick: 0, amount: 0, balance_after: -200 });
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.evicted(), 1);
//! ```

use serde::Serialize;
use std::collections::VecDeque;

/// Simulation event capturing a state change.
///
/// `tick` is the zero-based index of the play the event belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type")]
pub enum Event {
    /// Ticket price withdrawn from the player's account
    TicketPurchased {
        tick: u64,
        price: i64,
        balance_after: i64,
    },

    /// New draw became the latest draw
    DrawCompleted {
        tick: u64,
        numbers: Vec<u32>,
        bonus: u32,
    },

    /// Ticket evaluated against the draw
    TicketSettled {
        tick: u64,
        main_matches: usize,
        bonus_matched: bool,
        tier: Option<String>,
        payout: i64,
    },

    /// Payout credited to the player's account
    WinningsDeposited {
        tick: u64,
        amount: i64,
        balance_after: i64,
    },

    /// Session cleared; `ticks_discarded` plays were thrown away
    SessionReset { tick: u64, ticks_discarded: u64 },

    /// Player switched to a different ticket (always follows a reset)
    TicketReplaced {
        tick: u64,
        numbers: Vec<u32>,
        bonus: Option<u32>,
    },
}

impl Event {
    /// Get the tick number when this event occurred
    pub fn tick(&self) -> u64 {
        match self {
            Event::TicketPurchased { tick, .. } => *tick,
            Event::DrawCompleted { tick, .. } => *tick,
            Event::TicketSettled { tick, .. } => *tick,
            Event::WinningsDeposited { tick, .. } => *tick,
            Event::SessionReset { tick, .. } => *tick,
            Event::TicketReplaced { tick, .. } => *tick,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::TicketPurchased { .. } => "TicketPurchased",
            Event::DrawCompleted { .. } => "DrawCompleted",
            Event::TicketSettled { .. } => "TicketSettled",
            Event::WinningsDeposited { .. } => "WinningsDeposited",
            Event::SessionReset { .. } => "SessionReset",
            Event::TicketReplaced { .. } => "TicketReplaced",
        }
    }

    /// Signed effect on the account balance, 0 for non-ledger events
    pub fn balance_delta(&self) -> i64 {
        match self {
            Event::TicketPurchased { price, .. } => -*price,
            Event::WinningsDeposited { amount, .. } => *amount,
            _ => 0,
        }
    }
}

/// Bounded event log, oldest events evicted first
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: VecDeque<Event>,
    /// Maximum retained events, 0 disables logging
    limit: usize,
    /// Events dropped to stay within `limit`
    evicted: u64,
}

impl EventLog {
    /// Create a new empty event log retaining at most `limit` events
    pub fn new(limit: usize) -> Self {
        Self {
            events: VecDeque::new(),
            limit,
            evicted: 0,
        }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        if self.limit == 0 {
            self.evicted += 1;
            return;
        }
        if self.events.len() == self.limit {
            self.events.pop_front();
            self.evicted += 1;
        }
        self.events.push_back(event);
    }

    /// Get the number of events retained
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events no longer retained
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Retained events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Get events for a specific tick
    pub fn events_at_tick(&self, tick: u64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
        self.evicted = 0;
    }
}
