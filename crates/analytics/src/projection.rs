use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use store::{Category, Transaction};

/// Coarse three-level label for how favorable the projected savings rate is.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Strict partition of the rate line: boundary values resolve to the
    /// lower tier (rate 15 is Medium, rate 8 is Low).
    pub fn from_rate(rate: f64) -> Self {
        if rate > 15.0 {
            Confidence::High
        } else if rate > 8.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Expense breakdown over the three budget categories. Expenses recorded
/// under any other category count toward the total but not the breakdown.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct CategoryExpenses {
    #[serde(rename = "Essential")]
    pub essential: i64,
    #[serde(rename = "Discretionary")]
    pub discretionary: i64,
    #[serde(rename = "Debt")]
    pub debt: i64,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub total_income: i64,
    pub total_expenses: i64,
    pub projected_savings: i64,
    /// Percent, rounded to the nearest integer for display. Confidence is
    /// classified on the unrounded rate.
    pub savings_rate: i64,
    pub category_expenses: CategoryExpenses,
    pub daily_safe_save: i64,
    pub confidence: Confidence,
}

/// Trailing-30-day rollup of income, expenses and derived savings rate.
pub fn project(transactions: &[Transaction], now: DateTime<Utc>) -> Projection {
    let window_start = now - Duration::days(30);

    let mut total_income = 0;
    let mut total_expenses = 0;
    let mut category_expenses = CategoryExpenses::default();

    for t in transactions {
        if t.date < window_start || t.date > now {
            continue;
        }
        if t.amount > 0 {
            total_income += t.amount;
        } else {
            let magnitude = t.amount.abs();
            total_expenses += magnitude;
            match t.category {
                Category::Essential => category_expenses.essential += magnitude,
                Category::Discretionary => category_expenses.discretionary += magnitude,
                Category::Debt => category_expenses.debt += magnitude,
                Category::Income => {}
            }
        }
    }

    let projected_savings = total_income - total_expenses;
    let rate = if total_income > 0 {
        (projected_savings as f64 / total_income as f64) * 100.0
    } else {
        0.0
    };

    Projection {
        total_income,
        total_expenses,
        projected_savings,
        savings_rate: rate.round() as i64,
        category_expenses,
        daily_safe_save: daily_safe_save(total_income),
        confidence: Confidence::from_rate(rate),
    }
}

/// 12% of trailing-30-day income spread across 30 days, kept within ₹10–₹50.
pub fn daily_safe_save(total_income: i64) -> i64 {
    (((total_income as f64) * 0.12 / 30.0).floor() as i64).clamp(10, 50)
}
