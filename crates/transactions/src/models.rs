use chrono::{DateTime, Utc};
use serde::Deserialize;
use store::UiCategory;

/// Body of `POST /transactions/add`. Every field is optional; the service
/// fills in the manual-entry defaults.
#[derive(Debug, Deserialize)]
pub struct AddTransactionRequest {
    pub merchant: Option<String>,
    pub amount: Option<i64>,
    pub category: Option<UiCategory>,
    pub date: Option<DateTime<Utc>>,
}

/// Body of `PUT /transactions/{id}`. Accepts the presentation-layer
/// category set; it is folded to canonical before storage.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub category: UiCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_all_fields_optional() {
        let req: AddTransactionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.merchant.is_none());
        assert!(req.amount.is_none());
        assert!(req.category.is_none());
        assert!(req.date.is_none());
    }

    #[test]
    fn test_update_request_accepts_ui_subcategory() {
        let req: UpdateCategoryRequest = serde_json::from_str(r#"{"category":"Food"}"#).unwrap();
        assert_eq!(req.category, UiCategory::Food);
    }
}
