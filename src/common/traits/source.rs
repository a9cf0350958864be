//! Data-access traits for readings and symptom history
//!
//! These traits describe the two storage contracts of the application: reading a
//! user's vitals over a date window, and appending to / reading back the
//! symptom check history.

use crate::error::Result;
use crate::models::UserId;
use crate::models::history::SymptomCheckRecord;
use crate::models::reading::VitalReading;
use crate::utils::period::DateWindow;

/// Default number of history records returned to the user
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Source of daily vital readings
pub trait ReadingSource {
    /// All readings of `user_id` whose date lies inside `window`, oldest first
    fn readings_between(&self, user_id: UserId, window: &DateWindow) -> Result<Vec<VitalReading>>;
}

/// Append-only store of symptom checks
pub trait HistoryStore {
    /// Append a record to the store
    fn append(&mut self, record: SymptomCheckRecord) -> Result<()>;

    /// Up to `limit` records of `user_id`, most recent first
    fn recent(&self, user_id: UserId, limit: usize) -> Result<Vec<SymptomCheckRecord>>;

    /// The [`DEFAULT_HISTORY_LIMIT`] most recent records of `user_id`
    fn recent_default(&self, user_id: UserId) -> Result<Vec<SymptomCheckRecord>> {
        self.recent(user_id, DEFAULT_HISTORY_LIMIT)
    }
}

/// Order records most recent first and keep at most `limit`
///
/// Records with equal timestamps keep reverse insertion order.
pub(crate) fn most_recent_first<I>(records: I, limit: usize) -> Vec<SymptomCheckRecord>
where
    I: DoubleEndedIterator<Item = SymptomCheckRecord>,
{
    let mut records: Vec<_> = records.rev().collect();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records.truncate(limit);
    records
}
