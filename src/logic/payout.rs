//! Three-place payout split of an entry-fee prize pool, in whole dollars.

use crate::models::{PayoutBreakdown, PayoutEntry, PayoutPlace, MAX_PRIZE_POOL};

/// Fewer players than this and no payouts are shown.
pub const MIN_PLAYERS_FOR_PAYOUT: usize = 6;

/// First place starts at this share of the pool.
const FIRST_PLACE_SHARE: f64 = 0.55;

/// Second place must beat third by at least this much once the spread guard fires.
const MIN_SECOND_OVER_THIRD: f64 = 5.0;

/// First place must beat third by at least this much once the spread guard fires.
const MIN_FIRST_OVER_THIRD: f64 = 10.0;

/// Compute the payout breakdown for `num_players` each paying `entry_fee`.
///
/// Returns `None` when there is no fee (`entry_fee <= 0` or not finite), fewer than
/// [`MIN_PLAYERS_FOR_PAYOUT`] players, or a pool above [`MAX_PRIZE_POOL`].
///
/// Third place gets one entry fee (floored), first gets 55% of the pool (floored), and second
/// gets the floored remainder. If second would not beat third, second is raised to third + 5
/// and first is lowered by the same amount but kept at least third + 10. In that case the
/// amounts no longer add up to the pool.
pub fn compute_payouts(num_players: usize, entry_fee: f64) -> Option<PayoutBreakdown> {
    if !entry_fee.is_finite() || entry_fee <= 0.0 || num_players < MIN_PLAYERS_FOR_PAYOUT {
        return None;
    }
    let prize_pool = entry_fee * num_players as f64;
    if !prize_pool.is_finite() || prize_pool > MAX_PRIZE_POOL {
        log::warn!("Prize pool {} is too large to pay out in whole dollars", prize_pool);
        return None;
    }
    let (first, second, third) = split_pool(prize_pool, entry_fee);

    Some(PayoutBreakdown {
        entry_fee,
        prize_pool,
        entries: [
            entry(PayoutPlace::First, first, prize_pool),
            entry(PayoutPlace::Second, second, prize_pool),
            entry(PayoutPlace::Third, third, prize_pool),
        ],
    })
}

/// Raw (first, second, third) amounts before emission.
fn split_pool(prize_pool: f64, entry_fee: f64) -> (f64, f64, f64) {
    let third = entry_fee.floor();
    let mut first = (prize_pool * FIRST_PLACE_SHARE).floor();
    let mut second = prize_pool - first - third;

    // Whole-dollar part of the remainder goes to first; second keeps its floor.
    let second_floor = second.floor();
    first += (second - second_floor).floor();
    second = second_floor;

    if second <= third {
        let diff = third - second + MIN_SECOND_OVER_THIRD;
        second += diff;
        first = (first - diff).max(third + MIN_FIRST_OVER_THIRD);
        log::warn!(
            "Payout spread guard fired for pool {:.2}: paying {} total",
            prize_pool,
            first + second + third
        );
    }

    (first, second, third)
}

fn entry(place: PayoutPlace, amount: f64, prize_pool: f64) -> PayoutEntry {
    let amount = amount.floor().max(0.0);
    PayoutEntry {
        place,
        amount: amount as u64,
        percentage: round_to_tenth(amount / prize_pool * 100.0),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_pool_when_second_beats_third() {
        assert_eq!(split_pool(100.0, 10.0), (55.0, 35.0, 10.0));
        assert_eq!(split_pool(30.0, 5.0), (16.0, 9.0, 5.0));
    }

    #[test]
    fn split_drops_cents_from_fractional_fee() {
        // pool 6 * 7.5 = 45: third 7, first floor(24.75) = 24, second 14
        assert_eq!(split_pool(45.0, 7.5), (24.0, 14.0, 7.0));
    }

    #[test]
    fn spread_guard_raises_second_and_floors_first() {
        // third 8, first 11, second 1 -> diff 12: second 13, first max(-1, 18) = 18
        let (first, second, third) = split_pool(20.0, 8.0);
        assert_eq!((first, second, third), (18.0, 13.0, 8.0));
        assert!(second - third >= MIN_SECOND_OVER_THIRD);
        assert!(first - third >= MIN_FIRST_OVER_THIRD);
        // Accepted: the guard pays out more than the pool.
        assert!(first + second + third > 20.0);
    }

    #[test]
    fn spread_guard_fires_on_tie() {
        // third 10, first floor(24.2) = 24, second 10 -> diff 5: second 15, first max(19, 20) = 20
        assert_eq!(split_pool(44.0, 10.0), (20.0, 15.0, 10.0));
    }

    #[test]
    fn spread_guard_keeps_first_ten_over_third() {
        // third 10, first floor(19.8) = 19, second 7 -> diff 8: second 15, first max(11, 20) = 20
        assert_eq!(split_pool(36.0, 10.0), (20.0, 15.0, 10.0));
        // third 20, first floor(55) = 55, second 25 -> no guard
        assert_eq!(split_pool(100.0, 20.0), (55.0, 25.0, 20.0));
    }

    #[test]
    fn rounds_percentage_to_one_decimal() {
        assert_eq!(round_to_tenth(33.3333), 33.3);
        assert_eq!(round_to_tenth(16.0 / 30.0 * 100.0), 53.3);
    }
}
