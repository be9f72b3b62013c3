//! Tests for TimeManager
//!
//! One tick is one draw; draws are spaced `days_per_draw` days apart.

use lottery_simulator_core_rs::{ElapsedTime, TimeManager};

#[test]
fn test_time_manager_new() {
    let time = TimeManager::new(7);
    assert_eq!(time.current_tick(), 0);
    assert_eq!(time.elapsed_days(), 0);
    assert_eq!(time.days_per_draw(), 7);
}

#[test]
fn test_advance_tick() {
    let mut time = TimeManager::new(7);

    time.advance_tick();
    assert_eq!(time.current_tick(), 1);
    assert_eq!(time.elapsed_days(), 7);

    time.advance_tick();
    assert_eq!(time.current_tick(), 2);
    assert_eq!(time.elapsed_days(), 14);
}

#[test]
fn test_weekly_draws_for_a_year() {
    let mut time = TimeManager::new(7);

    for _ in 0..53 {
        time.advance_tick();
    }

    // 53 weeks = 371 days = 1 year, 0 weeks, 6 days
    let elapsed = time.elapsed();
    assert_eq!(elapsed.total_days, 371);
    assert_eq!(elapsed.years, 1);
    assert_eq!(elapsed.weeks, 0);
    assert_eq!(elapsed.days, 6);
}

#[test]
fn test_twice_weekly_cadence() {
    let mut time = TimeManager::new(3);

    for _ in 0..10 {
        time.advance_tick();
    }

    assert_eq!(time.elapsed(), ElapsedTime::from_days(30));
    assert_eq!(time.elapsed().weeks, 4);
    assert_eq!(time.elapsed().days, 2);
}

#[test]
fn test_reset_returns_to_zero() {
    let mut time = TimeManager::new(7);
    time.advance_tick();
    time.advance_tick();

    time.reset();

    assert_eq!(time.current_tick(), 0);
    assert_eq!(time.elapsed_days(), 0);
    assert_eq!(time.days_per_draw(), 7);
}
