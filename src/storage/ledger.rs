use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{ExpenseRecord, UserId};

/// In-memory store of expense records, one append-only sequence per user.
///
/// A single lock guards the whole map, so appends and queries for different
/// users can be issued from concurrent handlers.
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: RwLock<HashMap<UserId, Vec<ExpenseRecord>>>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the user's sequence.
    /// No validation happens here; callers hand in well-formed records.
    pub async fn append(&self, user: UserId, record: ExpenseRecord) {
        let mut expenses = self.expenses.write().await;
        expenses.entry(user).or_default().push(record);
    }

    /// Records with `timestamp >= since`, in insertion order.
    /// Unknown users yield an empty list.
    pub async fn query(&self, user: UserId, since: DateTime<Utc>) -> Vec<ExpenseRecord> {
        let expenses = self.expenses.read().await;
        expenses
            .get(&user)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.timestamp >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every record for the user, in insertion order.
    pub async fn query_all(&self, user: UserId) -> Vec<ExpenseRecord> {
        let expenses = self.expenses.read().await;
        expenses.get(&user).cloned().unwrap_or_default()
    }

    /// Number of records stored for the user.
    pub async fn count(&self, user: UserId) -> usize {
        let expenses = self.expenses.read().await;
        expenses.get(&user).map_or(0, Vec::len)
    }
}
