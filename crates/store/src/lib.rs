use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, RwLock};

use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod models;

pub use models::{Budget, Category, Transaction, UiCategory, UserProfile};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Resource not found")]
    NotFound,
    #[error("State lock poisoned")]
    Poisoned,
}

/// Process-local application state. Replaces the usual database layer: one
/// implicit user, everything lost on restart.
///
/// All mutation goes through `&self` methods holding a write lock for the
/// duration of the change, so concurrent handlers cannot observe a partial
/// update. Reads hand out snapshots; aggregation runs on the snapshot.
pub struct Store {
    transactions: RwLock<Vec<Transaction>>,
    budget: RwLock<Budget>,
    user: RwLock<Option<UserProfile>>,
    next_id: AtomicI64,
    rng: Mutex<StdRng>,
}

impl Store {
    /// `seed` pins the RNG for deterministic data generation; `None` draws
    /// from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            transactions: RwLock::new(Vec::new()),
            budget: RwLock::new(Budget::default()),
            user: RwLock::new(None),
            next_id: AtomicI64::new(1),
            rng: Mutex::new(rng),
        }
    }

    pub fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Runs `f` with exclusive access to the store's RNG.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, StoreError> {
        let mut rng = self.rng.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut rng))
    }

    /// Immutable snapshot of the full transaction list, most recent first.
    pub fn snapshot_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let transactions = self.transactions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(transactions.clone())
    }

    pub fn transaction_count(&self) -> Result<usize, StoreError> {
        let transactions = self.transactions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(transactions.len())
    }

    pub fn replace_transactions(&self, new: Vec<Transaction>) -> Result<(), StoreError> {
        let mut transactions = self.transactions.write().map_err(|_| StoreError::Poisoned)?;
        *transactions = new;
        Ok(())
    }

    /// Prepends a transaction so the newest entry stays first.
    pub fn prepend_transaction(&self, transaction: Transaction) -> Result<(), StoreError> {
        let mut transactions = self.transactions.write().map_err(|_| StoreError::Poisoned)?;
        transactions.insert(0, transaction);
        Ok(())
    }

    /// Re-categorizes one transaction in place, refreshing its derived icon.
    /// Returns the updated record, or `NotFound` without touching the list.
    pub fn update_transaction_category(
        &self,
        id: i64,
        category: Category,
    ) -> Result<Transaction, StoreError> {
        let mut transactions = self.transactions.write().map_err(|_| StoreError::Poisoned)?;
        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;

        transaction.category = category;
        transaction.icon = category.icon().to_string();
        Ok(transaction.clone())
    }

    pub fn budget(&self) -> Result<Budget, StoreError> {
        let budget = self.budget.read().map_err(|_| StoreError::Poisoned)?;
        Ok(budget.clone())
    }

    pub fn replace_budget(&self, new: Budget) -> Result<Budget, StoreError> {
        let mut budget = self.budget.write().map_err(|_| StoreError::Poisoned)?;
        *budget = new;
        Ok(budget.clone())
    }

    pub fn user(&self) -> Result<Option<UserProfile>, StoreError> {
        let user = self.user.read().map_err(|_| StoreError::Poisoned)?;
        Ok(user.clone())
    }

    pub fn set_user(&self, profile: UserProfile) -> Result<(), StoreError> {
        let mut user = self.user.write().map_err(|_| StoreError::Poisoned)?;
        *user = Some(profile);
        Ok(())
    }
}

// do not add #[cfg(test)] here because it hides this method from libraries.
pub fn get_test_store() -> Store {
    // Fixed seed keeps generator-backed tests deterministic.
    Store::new(Some(42))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let store = get_test_store();
        let a = store.allocate_id();
        let b = store.allocate_id();
        assert!(b > a);
    }

    #[test]
    fn test_update_category_not_found_leaves_list_untouched() {
        let store = get_test_store();
        let t = Transaction::new(1, "Swiggy".into(), -250, Category::Discretionary, Utc::now());
        store.replace_transactions(vec![t.clone()]).unwrap();

        let err = store.update_transaction_category(999, Category::Debt).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert_eq!(store.snapshot_transactions().unwrap(), vec![t]);
    }

    #[test]
    fn test_update_category_refreshes_icon() {
        let store = get_test_store();
        let t = Transaction::new(7, "Amazon".into(), -900, Category::Discretionary, Utc::now());
        store.replace_transactions(vec![t]).unwrap();

        let updated = store.update_transaction_category(7, Category::Essential).unwrap();
        assert_eq!(updated.category, Category::Essential);
        assert_eq!(updated.icon, "🛒");
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let store = get_test_store();
        let old = Transaction::new(1, "Zomato".into(), -400, Category::Discretionary, Utc::now());
        let new = Transaction::new(2, "Salary Credit".into(), 20000, Category::Income, Utc::now());
        store.replace_transactions(vec![old]).unwrap();
        store.prepend_transaction(new.clone()).unwrap();

        assert_eq!(store.snapshot_transactions().unwrap()[0], new);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::RngCore;

        let a = Store::new(Some(7)).with_rng(|rng| rng.next_u64()).unwrap();
        let b = Store::new(Some(7)).with_rng(|rng| rng.next_u64()).unwrap();
        assert_eq!(a, b);
    }
}
