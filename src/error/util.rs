//! Utility functions for error handling
//!
//! This module provides helpers that open and create files with rich error information.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HealthError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(HealthError::file_error(path, "File not found")
            .context(format!("Needed for: {purpose}")));
    }

    if !path.is_file() {
        return Err(HealthError::file_error(path, "Path is not a file")
            .context(format!("Expected a file for: {purpose}")));
    }

    fs::File::open(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for: {purpose}"),
        };
        HealthError::file_error_with_source(path, message, e)
    })
}

/// Open a file for appending, creating it and its parent directories when missing
pub fn open_for_append(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            HealthError::file_error_with_source(parent, format!("Cannot create directory for: {purpose}"), e)
        })?;
    }

    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| HealthError::file_error_with_source(path, format!("Failed to open file for: {purpose}"), e))
}
