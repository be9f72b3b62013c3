//! Tests for session snapshots and ticket fingerprints

use lottery_simulator_core_rs::orchestrator::{compute_config_hash, validate_snapshot};
use lottery_simulator_core_rs::{
    LotteryDraw, LotterySession, ScriptedDraws, SessionConfig, SessionSnapshot, SimulationError,
    Ticket,
};

fn player_ticket() -> Ticket {
    Ticket::new([5, 12, 19, 26, 33, 40], Some(2)).unwrap()
}

fn played_session(ticks: u64) -> LotterySession {
    let mut session = LotterySession::new(SessionConfig::default(), player_ticket()).unwrap();
    session.run(ticks).unwrap();
    session
}

#[test]
fn test_snapshot_reflects_session() {
    let session = played_session(52);

    let snapshot = session.snapshot().unwrap();

    assert_eq!(snapshot.session_id, session.id());
    assert_eq!(snapshot.ticket, player_ticket());
    assert_eq!(snapshot.ticks, 52);
    assert_eq!(snapshot.elapsed.weeks, 52);
    assert_eq!(snapshot.ticket_price, 200);
    assert_eq!(snapshot.latest_draw.as_ref(), session.latest_draw());
    assert_eq!(snapshot.total_spent, 52 * 200);
    assert_eq!(snapshot.balance, session.balance());
    assert!(snapshot.lowest_balance <= snapshot.balance);
    assert_eq!(snapshot.winnings_table.total_plays(), 52);
    assert!(!snapshot.halted);

    validate_snapshot(&snapshot).unwrap();
}

#[test]
fn test_fresh_snapshot_has_no_draw() {
    let session = played_session(0);

    let snapshot = session.snapshot().unwrap();

    assert_eq!(snapshot.ticks, 0);
    assert!(snapshot.latest_draw.is_none());
    assert_eq!(snapshot.balance, 0);
    validate_snapshot(&snapshot).unwrap();
}

#[test]
fn test_fingerprint_stable_across_ticks_and_reset() {
    let mut session = played_session(0);
    let before = session.snapshot().unwrap();

    session.run(30).unwrap();
    let during = session.snapshot().unwrap();
    session.reset();
    let after = session.snapshot().unwrap();

    assert!(before.same_ticket_as(&during));
    assert!(during.same_ticket_as(&after));
    assert_eq!(before.ticket_fingerprint.len(), 64);
}

#[test]
fn test_fingerprint_changes_with_ticket_and_config() {
    let mut session = played_session(0);
    let original = session.snapshot().unwrap();

    session
        .replace_ticket(Ticket::new([5, 12, 19, 26, 33, 41], Some(2)).unwrap())
        .unwrap();
    let replaced = session.snapshot().unwrap();

    let pricier = SessionConfig {
        ticket_price: 300,
        ..SessionConfig::default()
    };
    let other = LotterySession::new(pricier, player_ticket())
        .unwrap()
        .snapshot()
        .unwrap();

    assert!(!original.same_ticket_as(&replaced));
    assert!(!original.same_ticket_as(&other));
    assert_ne!(original.session_id, replaced.session_id);
}

#[test]
fn test_two_sessions_same_ticket_share_fingerprint() {
    let a = played_session(3).snapshot().unwrap();
    let b = played_session(9).snapshot().unwrap();

    assert!(a.same_ticket_as(&b));
    assert_ne!(a.session_id, b.session_id);
}

#[test]
fn test_snapshot_json_for_display() {
    let snapshot = played_session(10).snapshot().unwrap();

    let json = snapshot.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["ticks"], 10);
    assert_eq!(value["ticket"]["numbers"], serde_json::json!([5, 12, 19, 26, 33, 40]));
    assert_eq!(value["ticket"]["bonus"], 2);
    assert_eq!(value["elapsed"]["total_days"], 70);
    assert_eq!(value["winnings_table"]["tiers"][0]["name"], "Jackpot");

    let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_halted_session_snapshot() {
    let source = ScriptedDraws::new(vec![
        LotteryDraw::new(vec![1, 2, 3, 4, 5, 6], 7).unwrap(),
    ]);
    let mut session =
        LotterySession::with_draw_source(SessionConfig::default(), player_ticket(), Box::new(source))
            .unwrap();

    session.tick().unwrap();
    assert!(session.tick().is_err());

    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.halted);
    assert_eq!(snapshot.ticks, 1);
    validate_snapshot(&snapshot).unwrap();
}

#[test]
fn test_validate_snapshot_detects_ledger_mismatch() {
    let mut snapshot = played_session(5).snapshot().unwrap();
    snapshot.balance += 1;

    assert!(matches!(
        validate_snapshot(&snapshot),
        Err(SimulationError::StateValidation(_))
    ));
}

#[test]
fn test_validate_snapshot_detects_spending_mismatch() {
    let mut snapshot = played_session(5).snapshot().unwrap();
    snapshot.ticks = 6;

    let err = validate_snapshot(&snapshot).unwrap_err();
    assert!(err.to_string().contains("Spending mismatch"));
}

#[test]
fn test_validate_snapshot_detects_play_count_mismatch() {
    let mut snapshot = played_session(5).snapshot().unwrap();
    snapshot.winnings_table.losing_plays += 1;

    let err = validate_snapshot(&snapshot).unwrap_err();
    assert!(err.to_string().contains("Play count mismatch"));
}

#[test]
fn test_config_hash_ignores_field_order() {
    let a: serde_json::Value = serde_json::from_str(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
    let b: serde_json::Value = serde_json::from_str(r#"{"b": [1, 2], "a": 1}"#).unwrap();

    assert_eq!(
        compute_config_hash(&a).unwrap(),
        compute_config_hash(&b).unwrap()
    );
}
