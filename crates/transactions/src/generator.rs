use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use store::{Category, Transaction};

/// Demo merchant pool, Indian context.
const MERCHANTS: &[(&str, Category)] = &[
    ("Big Bazaar", Category::Essential),
    ("Punjab Kirana Store", Category::Essential),
    ("Mother Dairy", Category::Essential),
    ("Reliance Fresh", Category::Essential),
    ("Paytm Recharge", Category::Essential),
    ("Bharat Gas", Category::Essential),
    ("State Bus Depot", Category::Essential),
    ("LIC Premium", Category::Debt),
    ("HDFC Bank EMI", Category::Debt),
    ("Credit Card Payment", Category::Debt),
    ("Swiggy", Category::Discretionary),
    ("Zomato", Category::Discretionary),
    ("BookMyShow", Category::Discretionary),
    ("Myntra", Category::Discretionary),
    ("Amazon", Category::Discretionary),
    ("Flipkart", Category::Discretionary),
    ("Salary Credit", Category::Income),
    ("Freelance Payment", Category::Income),
];

/// Uniform pick over this slice gives the category weighting: most spending
/// is essentials, one salary credit per handful of expenses.
const CATEGORY_MIX: &[Category] = &[
    Category::Essential,
    Category::Essential,
    Category::Essential,
    Category::Essential,
    Category::Essential,
    Category::Discretionary,
    Category::Discretionary,
    Category::Discretionary,
    Category::Debt,
    Category::Debt,
    Category::Income,
];

pub fn random_merchant<R: Rng>(rng: &mut R, category: Category) -> &'static str {
    let pool: Vec<&'static str> = MERCHANTS
        .iter()
        .filter(|(_, c)| *c == category)
        .map(|(name, _)| *name)
        .collect();
    pool.choose(rng).copied().unwrap_or("Manual Entry")
}

/// Unsigned rupee amount drawn from the category's typical range.
pub fn random_amount<R: Rng>(rng: &mut R, category: Category) -> i64 {
    match category {
        Category::Essential => rng.gen_range(50..=1050),
        Category::Discretionary => rng.gen_range(100..=2100),
        Category::Debt => rng.gen_range(500..=5500),
        Category::Income => rng.gen_range(15000..=35000),
    }
}

fn random_date<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = rng.gen_range(0..30 * 24 * 60 * 60);
    now - Duration::seconds(offset)
}

/// Produces `count` plausible transactions over the trailing 30 days,
/// most recent first. Expenses carry negative amounts, income positive.
pub fn generate_history<R: Rng>(
    rng: &mut R,
    mut next_id: impl FnMut() -> i64,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(count);

    for _ in 0..count {
        let category = *CATEGORY_MIX.choose(rng).unwrap_or(&Category::Essential);
        let merchant = random_merchant(rng, category);
        let amount = random_amount(rng, category);
        let amount = if category == Category::Income {
            amount
        } else {
            -amount
        };

        transactions.push(Transaction::new(
            next_id(),
            merchant.to_string(),
            amount,
            category,
            random_date(rng, now),
        ));
    }

    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64, count: usize) -> Vec<Transaction> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut id = 0;
        generate_history(
            &mut rng,
            || {
                id += 1;
                id
            },
            count,
            Utc::now(),
        )
    }

    #[test]
    fn test_generates_requested_count_sorted_descending() {
        let transactions = generate(1, 15);
        assert_eq!(transactions.len(), 15);
        for pair in transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_amount_sign_matches_category() {
        for t in generate(2, 50) {
            if t.category == Category::Income {
                assert!(t.amount > 0, "income must be positive: {t:?}");
            } else {
                assert!(t.amount < 0, "expenses must be negative: {t:?}");
            }
        }
    }

    #[test]
    fn test_amounts_within_category_ranges() {
        for t in generate(3, 100) {
            let magnitude = t.amount.abs();
            let (lo, hi) = match t.category {
                Category::Essential => (50, 1050),
                Category::Discretionary => (100, 2100),
                Category::Debt => (500, 5500),
                Category::Income => (15000, 35000),
            };
            assert!(magnitude >= lo && magnitude <= hi, "{t:?}");
        }
    }

    #[test]
    fn test_dates_within_trailing_30_days() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(4);
        let mut id = 0;
        let transactions = generate_history(
            &mut rng,
            || {
                id += 1;
                id
            },
            30,
            now,
        );
        let window_start = now - Duration::days(30);
        for t in &transactions {
            assert!(t.date >= window_start && t.date <= now);
        }
    }

    #[test]
    fn test_merchant_belongs_to_category() {
        for t in generate(5, 50) {
            let registered = MERCHANTS
                .iter()
                .any(|(name, c)| *name == t.merchant && *c == t.category);
            assert!(registered, "{t:?}");
        }
    }

    #[test]
    fn test_same_seed_same_history() {
        let a = generate(9, 12);
        let b = generate(9, 12);
        // Dates differ (Utc::now), everything else must line up.
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.merchant, y.merchant);
            assert_eq!(x.amount, y.amount);
            assert_eq!(x.category, y.category);
        }
    }
}
