//! In-memory symptom check history

use crate::common::traits::HistoryStore;
use crate::common::traits::source::most_recent_first;
use crate::error::Result;
use crate::models::UserId;
use crate::models::history::SymptomCheckRecord;

/// Symptom check history kept in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    records: Vec<SymptomCheckRecord>,
}

impl InMemoryHistory {
    /// Create a new empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all users
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&mut self, record: SymptomCheckRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn recent(&self, user_id: UserId, limit: usize) -> Result<Vec<SymptomCheckRecord>> {
        let records = self
            .records
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned();
        Ok(most_recent_first(records, limit))
    }
}
