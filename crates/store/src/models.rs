use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four canonical budget categories used by aggregation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Category {
    Essential,
    Discretionary,
    Debt,
    Income,
}

impl Category {
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Essential => "🛒",
            Category::Discretionary => "🎯",
            Category::Debt => "💳",
            Category::Income => "💰",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Essential => "Essential",
            Category::Discretionary => "Discretionary",
            Category::Debt => "Debt",
            Category::Income => "Income",
        }
    }
}

/// Presentation-layer category set. The mobile clients expose four extra
/// subcategories that aggregation never sees; they fold into the canonical
/// four via `canonical()`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum UiCategory {
    Essential,
    Discretionary,
    Debt,
    Income,
    Food,
    Transport,
    Entertainment,
    Investment,
}

impl UiCategory {
    pub fn canonical(&self) -> Category {
        match self {
            UiCategory::Essential | UiCategory::Food | UiCategory::Transport => {
                Category::Essential
            }
            UiCategory::Discretionary | UiCategory::Entertainment => Category::Discretionary,
            UiCategory::Debt => Category::Debt,
            UiCategory::Income | UiCategory::Investment => Category::Income,
        }
    }
}

/// A single dated money movement. Amounts are whole rupees, signed:
/// positive = income/credit, negative = expense/debit.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: i64,
    pub merchant: String,
    pub amount: i64,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub icon: String,
}

impl Transaction {
    pub fn new(
        id: i64,
        merchant: String,
        amount: i64,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            merchant,
            amount,
            category,
            date,
            icon: category.icon().to_string(),
        }
    }
}

/// User-editable spending targets in whole rupees.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Budget {
    pub essentials: i64,
    pub discretionary: i64,
    pub debt: i64,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            essentials: 15000,
            discretionary: 5000,
            debt: 3000,
        }
    }
}

impl Budget {
    /// Six months of essential spending, the planner's emergency-fund target.
    pub fn emergency_goal(&self) -> i64 {
        6 * self.essentials
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub income_frequency: String,
    pub rent: i64,
    pub emi: i64,
    pub goal: i64,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_categories_fold_into_canonical_set() {
        assert_eq!(UiCategory::Food.canonical(), Category::Essential);
        assert_eq!(UiCategory::Transport.canonical(), Category::Essential);
        assert_eq!(UiCategory::Entertainment.canonical(), Category::Discretionary);
        assert_eq!(UiCategory::Investment.canonical(), Category::Income);
        assert_eq!(UiCategory::Debt.canonical(), Category::Debt);
    }

    #[test]
    fn test_transaction_icon_derived_from_category() {
        let t = Transaction::new(1, "Swiggy".into(), -300, Category::Discretionary, Utc::now());
        assert_eq!(t.icon, "🎯");
    }

    #[test]
    fn test_emergency_goal_is_six_months_of_essentials() {
        let budget = Budget::default();
        assert_eq!(budget.emergency_goal(), 90000);
    }
}
