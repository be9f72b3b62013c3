//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use lottery_simulator_core_rs::RngManager;

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_range_inclusive_covers_both_ends() {
    let mut rng = RngManager::new(2024);
    let mut seen_min = false;
    let mut seen_max = false;

    for _ in 0..2000 {
        let val = rng.range_inclusive(1, 6);
        assert!((1..=6).contains(&val), "Value {} out of range [1, 6]", val);
        seen_min |= val == 1;
        seen_max |= val == 6;
    }

    assert!(seen_min && seen_max, "Both bounds should be reachable");
}

#[test]
fn test_range_inclusive_roughly_uniform() {
    let mut rng = RngManager::new(31337);
    let mut counts = [0u32; 10];

    for _ in 0..100_000 {
        counts[(rng.range_inclusive(1, 10) - 1) as usize] += 1;
    }

    // Expected 10_000 each; 10% tolerance is far outside normal variation.
    for (ball, count) in counts.iter().enumerate() {
        assert!(
            (9_000..=11_000).contains(count),
            "Ball {} drawn {} times",
            ball + 1,
            count
        );
    }
}

#[test]
fn test_sample_distinct_deterministic() {
    let mut rng1 = RngManager::new(99999);
    let mut rng2 = RngManager::new(99999);
    let mut pool1: Vec<u32> = (1..=49).collect();
    let mut pool2: Vec<u32> = (1..=49).collect();

    for _ in 0..50 {
        assert_eq!(
            rng1.sample_distinct(&mut pool1, 6),
            rng2.sample_distinct(&mut pool2, 6),
            "sample_distinct() not deterministic!"
        );
    }
}

#[test]
fn test_rng_state_resume() {
    let mut rng = RngManager::new(12345);
    rng.next();

    let mut resumed = RngManager::new(rng.get_state());

    assert_eq!(rng.next(), resumed.next());
}
