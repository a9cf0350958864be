//! Vital reading collection
//!
//! This module provides an in-memory store of daily readings, keyed by user and
//! date, that serves readings for a date window oldest first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use rustc_hash::FxHashMap;

use crate::common::traits::ReadingSource;
use crate::error::Result;
use crate::models::UserId;
use crate::models::reading::{ReadingRecord, VitalReading};
use crate::utils::period::DateWindow;

/// Readings of all users, at most one per user per day
#[derive(Debug, Clone, Default)]
pub struct ReadingCollection {
    by_user: FxHashMap<UserId, BTreeMap<NaiveDate, VitalReading>>,
}

impl ReadingCollection {
    /// Create a new empty reading collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from reading records
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ReadingRecord>,
    {
        let mut collection = Self::new();
        for record in records {
            collection.upsert(record.user_id, record.reading);
        }
        collection
    }

    /// Store a reading, replacing the user's earlier reading for the same day
    ///
    /// Returns the replaced reading, if any.
    pub fn upsert(&mut self, user_id: UserId, reading: VitalReading) -> Option<VitalReading> {
        let replaced = self
            .by_user
            .entry(user_id)
            .or_default()
            .insert(reading.date, reading);
        if let Some(previous) = &replaced {
            debug!("Replaced reading of user {user_id} for {}", previous.date);
        }
        replaced
    }

    /// Reading of a user for a specific day
    #[must_use]
    pub fn get(&self, user_id: UserId, date: NaiveDate) -> Option<&VitalReading> {
        self.by_user.get(&user_id)?.get(&date)
    }

    /// Number of readings stored for a user
    #[must_use]
    pub fn count_for(&self, user_id: UserId) -> usize {
        self.by_user.get(&user_id).map_or(0, BTreeMap::len)
    }

    /// Total number of readings across all users
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_user.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReadingSource for ReadingCollection {
    fn readings_between(&self, user_id: UserId, window: &DateWindow) -> Result<Vec<VitalReading>> {
        let readings = self
            .by_user
            .get(&user_id)
            .map(|days| {
                days.range(window.start()..=window.end())
                    .map(|(_, reading)| reading.clone())
                    .collect()
            })
            .unwrap_or_default();
        Ok(readings)
    }
}
