use chrono::{DateTime, Utc};
use store::{Category, Store, StoreError, Transaction};
use tracing::instrument;

use crate::generator;
use crate::models::AddTransactionRequest;

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Transaction not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for TransactionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => TransactionError::NotFound,
            StoreError::Poisoned => TransactionError::Internal(err.to_string()),
        }
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Full history, newest first. Regenerates a fresh demo set of 12 when
    /// the store is empty.
    #[instrument(skip(store))]
    pub fn list(store: &Store, now: DateTime<Utc>) -> Result<Vec<Transaction>, TransactionError> {
        if store.transaction_count()? == 0 {
            tracing::info!("transaction store empty, generating fresh demo data");
            Self::regenerate(store, 12, now)?;
        }
        Ok(store.snapshot_transactions()?)
    }

    /// Replaces the whole history with `count` freshly generated records.
    #[instrument(skip(store))]
    pub fn regenerate(
        store: &Store,
        count: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, TransactionError> {
        let transactions = store.with_rng(|rng| {
            generator::generate_history(rng, || store.allocate_id(), count, now)
        })?;
        store.replace_transactions(transactions.clone())?;
        Ok(transactions)
    }

    #[instrument(skip(store, req))]
    pub fn add(
        store: &Store,
        req: AddTransactionRequest,
        now: DateTime<Utc>,
    ) -> Result<Transaction, TransactionError> {
        let category = req
            .category
            .map(|c| c.canonical())
            .unwrap_or(Category::Discretionary);

        let transaction = Transaction::new(
            store.allocate_id(),
            req.merchant.unwrap_or_else(|| "Manual Entry".to_string()),
            req.amount.unwrap_or(0),
            category,
            req.date.unwrap_or(now),
        );

        store.prepend_transaction(transaction.clone())?;
        Ok(transaction)
    }

    #[instrument(skip(store))]
    pub fn update_category(
        store: &Store,
        id: i64,
        category: Category,
    ) -> Result<Transaction, TransactionError> {
        Ok(store.update_transaction_category(id, category)?)
    }
}
