// ============================================================
// DEDUP CONVERTER USE CASE
// ============================================================
// Orchestrate CSV parsing, duplicate removal, and JSON export

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::domain::csv::Dataset;
use crate::domain::error::Result;
use crate::infrastructure::config::ConverterConfig;
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::json::JsonWriter;

/// Outcome of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows read from the input (header excluded)
    pub rows_read: usize,

    /// Records written to the output
    pub rows_written: usize,

    /// Rows dropped as duplicates
    pub duplicates_removed: usize,

    /// Number of columns in every record
    pub columns: usize,

    /// Bytes written to the output file
    pub bytes_written: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// CSV to JSON conversion with exact-duplicate removal
#[derive(Debug, Clone, Default)]
pub struct DedupConverter {
    parser: CsvParser,
    writer: JsonWriter,
}

impl DedupConverter {
    pub fn new(parser: CsvParser) -> Self {
        Self {
            parser,
            writer: JsonWriter::new(),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Result<Self> {
        let delimiter = config.delimiter_byte()?;
        Ok(Self::new(CsvParser::new().with_delimiter(delimiter)))
    }

    /// Read `input_path`, drop duplicate rows, write JSON to `output_path`.
    ///
    /// The input is fully parsed before the output is touched, so a bad
    /// input never creates or modifies the output file.
    pub fn convert(&self, input_path: &Path, output_path: &Path) -> Result<ConversionSummary> {
        let start = Instant::now();

        let mut dataset = self.parser.parse_file(input_path)?;
        let rows_read = dataset.len();
        let duplicates_removed = Self::deduplicate(&mut dataset);

        let bytes_written = self.writer.write_file(&dataset, output_path)?;

        let summary = ConversionSummary {
            rows_read,
            rows_written: dataset.len(),
            duplicates_removed,
            columns: dataset.columns().len(),
            bytes_written,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            rows_read = summary.rows_read,
            rows_written = summary.rows_written,
            duplicates_removed = summary.duplicates_removed,
            elapsed_ms = summary.processing_time_ms,
            "Converted CSV to JSON"
        );

        Ok(summary)
    }

    /// Convert in-memory CSV content to the JSON text that `convert` writes
    pub fn convert_content(&self, content: &str) -> Result<String> {
        let mut dataset = self.parser.parse_content(content)?;
        Self::deduplicate(&mut dataset);
        self.writer.render(&dataset)
    }

    fn deduplicate(dataset: &mut Dataset) -> usize {
        let removed = dataset.remove_duplicates();
        if !removed.is_empty() {
            debug!(rows = ?removed, "Duplicate input rows (0-based, header excluded)");
            info!(
                removed = removed.len(),
                remaining = dataset.len(),
                "Removed duplicate rows"
            );
        }
        removed.len()
    }
}
