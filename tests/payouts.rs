//! Integration tests for the three-place payout split.

use team_randomizer_web::{compute_payouts, PayoutPlace, MAX_PRIZE_POOL, MIN_PLAYERS_FOR_PAYOUT};

fn amounts(num_players: usize, entry_fee: f64) -> (u64, u64, u64) {
    let b = compute_payouts(num_players, entry_fee).expect("payouts expected");
    (
        b.amount(PayoutPlace::First),
        b.amount(PayoutPlace::Second),
        b.amount(PayoutPlace::Third),
    )
}

#[test]
fn below_six_players_pays_nothing() {
    assert_eq!(MIN_PLAYERS_FOR_PAYOUT, 6);
    assert!(compute_payouts(5, 10.0).is_none());
    assert!(compute_payouts(0, 10.0).is_none());
}

#[test]
fn zero_or_negative_fee_pays_nothing() {
    assert!(compute_payouts(10, 0.0).is_none());
    assert!(compute_payouts(10, -5.0).is_none());
    assert!(compute_payouts(10, f64::NAN).is_none());
}

#[test]
fn ten_players_at_ten_dollars() {
    let b = compute_payouts(10, 10.0).unwrap();
    assert_eq!(b.prize_pool, 100.0);
    assert_eq!(b.entry_fee, 10.0);
    let places: Vec<_> = b.entries.iter().map(|e| e.place).collect();
    assert_eq!(places, vec![PayoutPlace::First, PayoutPlace::Second, PayoutPlace::Third]);
    let amounts: Vec<_> = b.entries.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![55, 35, 10]);
    let pcts: Vec<_> = b.entries.iter().map(|e| e.percentage).collect();
    assert_eq!(pcts, vec![55.0, 35.0, 10.0]);
    assert_eq!(b.total_paid(), 100);
}

#[test]
fn six_players_at_five_dollars() {
    assert_eq!(amounts(6, 5.0), (16, 9, 5));
    let b = compute_payouts(6, 5.0).unwrap();
    assert_eq!(b.entries[0].percentage, 53.3);
    assert_eq!(b.entries[1].percentage, 30.0);
    assert_eq!(b.entries[2].percentage, 16.7);
}

#[test]
fn fractional_fee_pays_whole_dollars_within_pool() {
    // pool 7 * 12.5 = 87.5: third 12, first floor(48.125) = 48, second floor(27.5) = 27
    let b = compute_payouts(7, 12.5).unwrap();
    assert_eq!(amounts(7, 12.5), (48, 27, 12));
    assert!((b.total_paid() as f64) <= b.prize_pool);
}

#[test]
fn places_are_ordered_by_amount() {
    for n in 6..=40 {
        for fee in [1.0, 2.5, 5.0, 10.0, 20.0, 33.33, 100.0] {
            let (first, second, third) = amounts(n, fee);
            assert!(first >= second && second > third, "n={n} fee={fee}");
        }
    }
}

#[test]
fn labels_match_places() {
    let b = compute_payouts(8, 10.0).unwrap();
    let labels: Vec<_> = b.entries.iter().map(|e| e.label()).collect();
    assert_eq!(labels, vec!["1st Place", "2nd Place", "3rd Place"]);
}

#[test]
fn repeated_calls_are_identical() {
    let a = compute_payouts(13, 7.25);
    let b = compute_payouts(13, 7.25);
    assert_eq!(a, b);
}

#[test]
fn pool_too_large_for_whole_dollars_pays_nothing() {
    assert!(compute_payouts(6, 1e308).is_none());
    assert!(compute_payouts(6, f64::MAX).is_none());
    // The fee alone fits, but the pool does not.
    assert!(compute_payouts(10, MAX_PRIZE_POOL).is_none());
}

#[test]
fn largest_representable_pool_still_pays_out_in_order() {
    let fee = MAX_PRIZE_POOL / 8.0;
    let b = compute_payouts(8, fee).unwrap();
    assert_eq!(b.prize_pool, MAX_PRIZE_POOL);
    let (first, second, third) = amounts(8, fee);
    assert!(first >= second && second > third);
    assert!((b.total_paid() as f64) <= b.prize_pool);
}
