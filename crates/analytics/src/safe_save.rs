use chrono::{DateTime, Utc};
use serde::Serialize;
use store::Transaction;

use crate::projection::Confidence;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct SafeSave {
    pub amount: i64,
    pub confidence: Confidence,
    pub message: String,
}

/// Same-day safe-save heuristic, keyed off how much has already been spent
/// today (UTC calendar date). This is a separate policy from the
/// projection's `daily_safe_save`; the two are not merged.
pub fn instant_recommendation(transactions: &[Transaction], now: DateTime<Utc>) -> SafeSave {
    let today = now.date_naive();
    let today_spent: i64 = transactions
        .iter()
        .filter(|t| t.amount < 0 && t.date.date_naive() == today)
        .map(|t| t.amount.abs())
        .sum();

    let (amount, confidence) = if today_spent < 200 {
        (45, Confidence::High)
    } else if today_spent < 500 {
        (30, Confidence::Medium)
    } else {
        (15, Confidence::Low)
    };

    SafeSave {
        amount,
        confidence,
        message: format!("Based on your spending today, you can safely save ₹{amount}"),
    }
}
