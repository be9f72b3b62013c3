//! Snapshot - observable session state
//!
//! A flat, serialisable view of a session for whatever is displaying it.
//! There is no way back from a snapshot to a session.
//!
//! # Critical Invariants
//!
//! - **Ledger**: `balance == total_winnings - total_spent`
//! - **Spending**: `total_spent == ticks * ticket_price`
//! - **Counting**: every tick is either a tier hit or a losing play
//! - **Ticket binding**: `ticket_fingerprint` changes with the ticket

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::core::time::ElapsedTime;
use crate::draw::LotteryDraw;
use crate::models::ticket::Ticket;
use crate::orchestrator::session::{SimulationError, WinningsTable};

/// Everything a display needs after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,

    /// SHA256 of config + ticket
    pub ticket_fingerprint: String,

    pub ticket: Ticket,

    pub ticks: u64,

    pub elapsed: ElapsedTime,

    pub ticket_price: i64,

    pub latest_draw: Option<LotteryDraw>,

    pub total_winnings: i64,

    pub total_spent: i64,

    pub balance: i64,

    /// Deepest debt reached
    pub lowest_balance: i64,

    pub winnings_table: WinningsTable,

    pub halted: bool,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SimulationError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Check if two snapshots were taken with the same config and ticket
    pub fn same_ticket_as(&self, other: &SessionSnapshot) -> bool {
        self.ticket_fingerprint == other.ticket_fingerprint
    }
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of any serialisable config
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on map iteration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());

    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation
// ============================================================================

/// Check the ledger invariants a snapshot must satisfy
pub fn validate_snapshot(snapshot: &SessionSnapshot) -> Result<(), SimulationError> {
    let expected_balance = snapshot
        .total_winnings
        .checked_sub(snapshot.total_spent)
        .ok_or_else(|| SimulationError::StateValidation("ledger totals overflow".to_string()))?;
    if snapshot.balance != expected_balance {
        return Err(SimulationError::StateValidation(format!(
            "Ledger mismatch: balance {} but winnings {} - spent {} = {}",
            snapshot.balance, snapshot.total_winnings, snapshot.total_spent, expected_balance
        )));
    }

    let expected_spent = i128::from(snapshot.ticks) * i128::from(snapshot.ticket_price);
    if i128::from(snapshot.total_spent) != expected_spent {
        return Err(SimulationError::StateValidation(format!(
            "Spending mismatch: {} ticks at {} but spent {}",
            snapshot.ticks, snapshot.ticket_price, snapshot.total_spent
        )));
    }

    let plays = snapshot.winnings_table.total_plays();
    if plays != snapshot.ticks {
        return Err(SimulationError::StateValidation(format!(
            "Play count mismatch: {} ticks but {} plays recorded",
            snapshot.ticks, plays
        )));
    }

    Ok(())
}
