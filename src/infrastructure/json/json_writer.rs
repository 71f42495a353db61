// ============================================================
// JSON WRITER
// ============================================================
// Serialize a dataset as an indented array of objects and write it out

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::domain::csv::Dataset;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage::ensure_parent_dir;

/// Writes datasets as pretty JSON (2-space indent, no trailing newline)
#[derive(Debug, Clone, Default)]
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the dataset to a JSON string
    pub fn render(&self, dataset: &Dataset) -> Result<String> {
        Ok(serde_json::to_string_pretty(dataset)?)
    }

    /// Render and write to `path`, replacing any existing file.
    /// Returns the number of bytes written.
    pub fn write_file(&self, dataset: &Dataset, path: &Path) -> Result<usize> {
        let json = self.render(dataset)?;

        ensure_parent_dir(path).map_err(|e| AppError::output(path, e))?;
        fs::write(path, &json).map_err(|e| AppError::output(path, e))?;

        debug!(path = %path.display(), bytes = json.len(), "Wrote JSON output");
        Ok(json.len())
    }
}
