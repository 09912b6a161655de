//! Payout breakdown: three places, whole-dollar amounts.

use serde::{Deserialize, Serialize};

/// Largest prize pool (and entry fee) in whole dollars that an `f64` still holds exactly.
pub const MAX_PRIZE_POOL: f64 = 9_007_199_254_740_992.0;

/// Finishing place that receives a payout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutPlace {
    First,
    Second,
    Third,
}

impl PayoutPlace {
    pub fn label(self) -> &'static str {
        match self {
            PayoutPlace::First => "1st Place",
            PayoutPlace::Second => "2nd Place",
            PayoutPlace::Third => "3rd Place",
        }
    }
}

/// One line of the payout breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutEntry {
    pub place: PayoutPlace,
    /// Whole dollars.
    pub amount: u64,
    /// Share of the prize pool, rounded to one decimal place.
    pub percentage: f64,
}

impl PayoutEntry {
    pub fn label(&self) -> &'static str {
        self.place.label()
    }
}

/// Full payout result for a pool: summary values plus 1st/2nd/3rd entries, in that order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    pub entry_fee: f64,
    pub prize_pool: f64,
    pub entries: [PayoutEntry; 3],
}

impl PayoutBreakdown {
    pub fn amount(&self, place: PayoutPlace) -> u64 {
        self.entries
            .iter()
            .find(|e| e.place == place)
            .map(|e| e.amount)
            .unwrap_or(0)
    }

    /// Sum of all amounts. Can exceed the pool when the minimum-spread adjustment fires.
    pub fn total_paid(&self) -> u64 {
        self.entries.iter().map(|e| e.amount).sum()
    }
}
