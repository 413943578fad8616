use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::schema::{NewTransaction, Transaction, TransactionPatch};

struct Records {
    by_id: BTreeMap<i64, Transaction>,
    /// Highest id ever held, so deleted ids are never handed out again.
    last_id: i64,
}

/// In-memory transaction records and the id counter.
///
/// Every operation takes the lock once, so callers on different worker
/// threads never observe a half-applied mutation.
pub struct TransactionStore {
    records: RwLock<Records>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        TransactionStore::new()
    }
}

impl TransactionStore {
    pub fn new() -> Self {
        TransactionStore {
            records: RwLock::new(Records {
                by_id: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Builds a store from ingested records, keeping their ids.
    pub fn from_records<I>(transactions: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut by_id = BTreeMap::new();
        let mut last_id = 0;
        for transaction in transactions {
            let id = transaction.id;
            if id <= 0 {
                return Err(StoreError::InvalidId(id));
            }
            if by_id.insert(id, transaction).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
            last_id = last_id.max(id);
        }

        Ok(TransactionStore {
            records: RwLock::new(Records { by_id, last_id }),
        })
    }

    /// All records in ascending id order, which is also creation order.
    pub async fn list(&self) -> Vec<Transaction> {
        let records = self.records.read().await;
        records.by_id.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    pub async fn get(&self, id: i64) -> Result<Transaction, StoreError> {
        let records = self.records.read().await;
        records
            .by_id
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub async fn create(&self, draft: NewTransaction) -> Result<Transaction, StoreError> {
        let mut records = self.records.write().await;
        let id = records
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)?;

        let transaction = Transaction::new(id, draft);
        records.by_id.insert(id, transaction.clone());
        records.last_id = id;

        log::debug!("Created transaction {}", id);
        Ok(transaction)
    }

    pub async fn update(
        &self,
        id: i64,
        patch: TransactionPatch,
    ) -> Result<Transaction, StoreError> {
        let mut records = self.records.write().await;
        let transaction = records.by_id.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        transaction.apply(patch);

        log::debug!("Updated transaction {}", id);
        Ok(transaction.clone())
    }

    /// Removes the record and returns it. A second delete of the same id is
    /// `NotFound`.
    pub async fn delete(&self, id: i64) -> Result<Transaction, StoreError> {
        let mut records = self.records.write().await;
        let removed = records.by_id.remove(&id).ok_or(StoreError::NotFound(id))?;

        log::debug!("Deleted transaction {}", id);
        Ok(removed)
    }
}
