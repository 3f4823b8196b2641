use serde::{Deserialize, Serialize};
use store::Budget;

/// Body of `PUT /budget`. Missing fields keep their current allocation, so
/// the client can adjust one target without resending the rest.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub essentials: Option<i64>,
    pub discretionary: Option<i64>,
    pub debt: Option<i64>,
}

impl UpdateBudgetRequest {
    pub fn apply(self, current: Budget) -> Budget {
        Budget {
            essentials: self.essentials.unwrap_or(current.essentials),
            discretionary: self.discretionary.unwrap_or(current.discretionary),
            debt: self.debt.unwrap_or(current.debt),
        }
    }
}

/// Wire view of the budget, carrying the derived emergency-fund target.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub essentials: i64,
    pub discretionary: i64,
    pub debt: i64,
    pub emergency_goal: i64,
}

impl From<Budget> for BudgetView {
    fn from(budget: Budget) -> Self {
        let emergency_goal = budget.emergency_goal();
        Self {
            essentials: budget.essentials,
            discretionary: budget.discretionary,
            debt: budget.debt,
            emergency_goal,
        }
    }
}
