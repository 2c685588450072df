// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::utils::error::StorageError;

/// One bracket's share of the selection.
#[derive(Debug, Serialize)]
pub struct BracketSelection {
    pub label: String,
    pub population: usize,
    pub selected: Vec<String>,
}

/// Full outcome of a sampling run, written as JSON when an output directory
/// is configured.
#[derive(Debug, Serialize)]
pub struct SelectionReport {
    pub source: String,
    pub total_members: usize,
    pub target: usize,
    pub brackets: Vec<BracketSelection>,
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Saves the selection report as pretty JSON, one file per run.
    pub fn save_selection(&self, report: &SelectionReport) -> Result<PathBuf, StorageError> {
        let filename = format!("selection_{}.json", Utc::now().format("%Y%m%dT%H%M%SZ"));
        let file_path = self.base_dir.join(filename);

        let payload = serde_json::json!({
            "source": &report.source,
            "total_members": report.total_members,
            "target": report.target,
            "brackets": &report.brackets,
            "generated_at": Utc::now().to_rfc3339(),
        });

        let body = serde_json::to_string_pretty(&payload)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, body).map_err(StorageError::IoError)?;

        tracing::info!("Saved selection report to {}", file_path.display());

        Ok(file_path)
    }
}
