// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::ParsedTable;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::Io)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves a condensed prompt (or bare condensed body) as a text file
    pub fn save_prompt(&self, stem: &str, prompt: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_prompt.txt", stem));

        fs::write(&file_path, prompt).map_err(StorageError::Io)?;

        tracing::info!("Saved prompt to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves extracted tables as pretty-printed JSON, the same array of
    /// {title, headers, rows} objects the condense/parse API exchanges
    pub fn save_tables(&self, stem: &str, tables: &[ParsedTable]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_tables.json", stem));

        let json = serde_json::to_string_pretty(tables)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, json).map_err(StorageError::Io)?;

        tracing::info!("Saved {} tables to {}", tables.len(), file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about an extraction run in JSON format
    pub fn save_tables_metadata(
        &self,
        stem: &str,
        tables: &[ParsedTable],
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_tables_meta.json", stem));

        let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();
        let row_count: usize = tables.iter().map(|t| t.rows.len()).sum();

        let metadata = serde_json::json!({
            "stem": stem,
            "table_count": tables.len(),
            "titles": titles,
            "total_rows": row_count,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::Io)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
