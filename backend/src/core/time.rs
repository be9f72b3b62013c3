//! Time management for the simulation
//!
//! Every tick is one draw. Draws happen at a fixed cadence of calendar days
//! (weekly by default), so the number of ticks translates directly into how
//! long a player would have needed to play the same ticket in real life.

use serde::{Deserialize, Serialize};

const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_YEAR: u64 = 365;

/// Counts draws and converts them into calendar time
///
/// # Example
/// ```
/// use lottery_simulator_core_rs::TimeManager;
///
/// let mut time = TimeManager::new(7); // one draw per week
/// time.advance_tick();
/// time.advance_tick();
/// assert_eq!(time.current_tick(), 2);
/// assert_eq!(time.elapsed_days(), 14);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeManager {
    /// Draws performed since the last reset
    current_tick: u64,
    /// Calendar days between two draws
    days_per_draw: u64,
}

/// Elapsed simulated time, split into whole years, weeks and days
///
/// `years * 365 + weeks * 7 + days == total_days`. Leap days are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub total_days: u64,
    pub years: u64,
    pub weeks: u64,
    pub days: u64,
}

impl ElapsedTime {
    pub fn from_days(total_days: u64) -> Self {
        let years = total_days / DAYS_PER_YEAR;
        let rest = total_days % DAYS_PER_YEAR;
        Self {
            total_days,
            years,
            weeks: rest / DAYS_PER_WEEK,
            days: rest % DAYS_PER_WEEK,
        }
    }
}

impl TimeManager {
    /// Create a new TimeManager
    ///
    /// # Panics
    /// Panics if `days_per_draw == 0`; session configs are validated before
    /// this is reached.
    pub fn new(days_per_draw: u64) -> Self {
        assert!(days_per_draw > 0, "days_per_draw must be positive");
        Self {
            current_tick: 0,
            days_per_draw,
        }
    }

    /// Advance time by one draw
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }

    /// Draws performed since the last reset
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn days_per_draw(&self) -> u64 {
        self.days_per_draw
    }

    /// Calendar days covered by the draws so far
    pub fn elapsed_days(&self) -> u64 {
        self.current_tick.saturating_mul(self.days_per_draw)
    }

    pub fn elapsed(&self) -> ElapsedTime {
        ElapsedTime::from_days(self.elapsed_days())
    }

    /// Back to tick zero, cadence unchanged
    pub fn reset(&mut self) {
        self.current_tick = 0;
    }
}
