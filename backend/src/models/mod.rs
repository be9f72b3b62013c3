//! Domain models for the lottery simulator

pub mod bank_account;
pub mod event;
pub mod ticket;

// Re-exports
pub use bank_account::{BankAccount, BankError};
pub use event::{Event, EventLog};
pub use ticket::{Ticket, TicketError};
