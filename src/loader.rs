//! Reference data and reading file loading utilities
//!
//! All reference files are JSON. The catalog and standards are loaded once at
//! process start and then passed by reference to the analysis functions.

use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::collections::ReadingCollection;
use crate::error::util::safe_open_file;
use crate::error::{HealthError, Result};
use crate::models::reading::ReadingRecord;
use crate::models::standard::VitalStandards;
use crate::models::symptom::{CatalogEntry, SymptomCatalog};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let file = safe_open_file(path, purpose)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| HealthError::from(e).context(format!("Failed to parse {}", path.display())))
}

/// Load the symptom catalog from a JSON array of catalog entries
pub fn load_catalog(path: &Path) -> Result<SymptomCatalog> {
    log_operation_start("Loading symptom catalog from", path);
    let start = Instant::now();

    let entries: Vec<CatalogEntry> = read_json(path, "symptom catalog")?;
    let entry_count = entries.len();
    let catalog = SymptomCatalog::from_entries(entries).map_err(|e| e.with_path(path))?;

    if catalog.is_empty() {
        log_warning("Symptom catalog contains no diseases", Some(path));
    } else if catalog.len() < entry_count {
        log::info!(
            "Catalog entries collapsed from {entry_count} to {} diseases",
            catalog.len()
        );
    }

    log_operation_complete("loaded", path, catalog.len(), Some(start.elapsed()));
    Ok(catalog)
}

/// Load the standards table from a JSON object keyed by metric
pub fn load_standards(path: &Path) -> Result<VitalStandards> {
    log_operation_start("Loading vital standards from", path);
    let standards: VitalStandards = read_json(path, "vital standards")?;
    log_operation_complete("loaded", path, standards.len(), None);
    Ok(standards)
}

/// Load reading records from a JSON array into a collection
///
/// A later record for the same user and day replaces an earlier one.
pub fn load_readings(path: &Path) -> Result<ReadingCollection> {
    log_operation_start("Loading vital readings from", path);
    let start = Instant::now();

    let records: Vec<ReadingRecord> = read_json(path, "vital readings")?;
    let record_count = records.len();
    let collection = ReadingCollection::from_records(records);

    if collection.len() < record_count {
        log_warning(
            &format!(
                "{} readings replaced by later readings for the same day",
                record_count - collection.len()
            ),
            Some(path),
        );
    }

    log_operation_complete("loaded", path, collection.len(), Some(start.elapsed()));
    Ok(collection)
}
