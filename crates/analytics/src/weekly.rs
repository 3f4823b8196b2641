use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;
use store::Transaction;

#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct DayTotals {
    pub income: i64,
    pub expense: i64,
    pub savings: i64,
}

/// Buckets the trailing seven days of activity by weekday name.
///
/// Aggregation keys on calendar date internally; the seven dates in the
/// lookback map to seven distinct weekday names, so two calendar days can
/// never fold into one bucket. A transaction inside the time window whose
/// calendar date falls outside the seven initialized days (possible only in
/// the partial day at the window's edge) is dropped rather than misfiled.
pub fn weekly_breakdown(
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> HashMap<String, DayTotals> {
    let window_start = now - Duration::days(7);

    let mut by_date: HashMap<NaiveDate, DayTotals> = (0..7)
        .map(|i| ((now - Duration::days(i)).date_naive(), DayTotals::default()))
        .collect();

    for t in transactions {
        if t.date < window_start || t.date > now {
            continue;
        }
        let Some(bucket) = by_date.get_mut(&t.date.date_naive()) else {
            continue;
        };
        if t.amount > 0 {
            bucket.income += t.amount;
        } else {
            bucket.expense += t.amount.abs();
        }
    }

    by_date
        .into_iter()
        .map(|(date, mut totals)| {
            totals.savings = (totals.income - totals.expense).max(0);
            (date.format("%a").to_string(), totals)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Category, Transaction};

    fn tx(id: i64, amount: i64, date: DateTime<Utc>) -> Transaction {
        let category = if amount > 0 {
            Category::Income
        } else {
            Category::Essential
        };
        Transaction::new(id, "test".into(), amount, category, date)
    }

    #[test]
    fn test_all_seven_weekdays_initialized() {
        let breakdown = weekly_breakdown(&[], Utc::now());
        assert_eq!(breakdown.len(), 7);
        for totals in breakdown.values() {
            assert_eq!(*totals, DayTotals::default());
        }
    }

    #[test]
    fn test_income_and_expense_split_by_sign() {
        let now = Utc::now();
        let transactions = vec![
            tx(1, 20000, now),
            tx(2, -500, now),
            tx(3, -300, now),
        ];

        let breakdown = weekly_breakdown(&transactions, now);
        let today = &breakdown[&now.date_naive().format("%a").to_string()];
        assert_eq!(today.income, 20000);
        assert_eq!(today.expense, 800);
        assert_eq!(today.savings, 19200);
    }

    #[test]
    fn test_savings_never_negative() {
        let now = Utc::now();
        let transactions = vec![tx(1, -900, now), tx(2, 100, now)];

        let breakdown = weekly_breakdown(&transactions, now);
        for totals in breakdown.values() {
            assert!(totals.savings >= 0);
        }
        let today = &breakdown[&now.date_naive().format("%a").to_string()];
        assert_eq!(today.savings, 0);
    }

    #[test]
    fn test_transactions_outside_window_excluded() {
        let now = Utc::now();
        let transactions = vec![
            tx(1, -100, now - Duration::days(10)),
            tx(2, -100, now + Duration::days(1)),
        ];

        let breakdown = weekly_breakdown(&transactions, now);
        for totals in breakdown.values() {
            assert_eq!(totals.expense, 0);
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let now = Utc::now();
        let transactions = vec![
            tx(1, 15000, now - Duration::days(1)),
            tx(2, -750, now - Duration::days(2)),
            tx(3, -1200, now - Duration::days(3)),
        ];

        let first = weekly_breakdown(&transactions, now);
        let second = weekly_breakdown(&transactions, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_savings_property_holds_for_generated_history() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);
        let mut id = 0;
        let history = transactions::generator::generate_history(
            &mut rng,
            || {
                id += 1;
                id
            },
            40,
            now,
        );

        for totals in weekly_breakdown(&history, now).values() {
            assert!(totals.savings >= 0);
            assert_eq!(totals.savings, (totals.income - totals.expense).max(0));
        }
    }
}
