mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::path::Path;

pub use crate::app::run;
pub use crate::application::{ConversionSummary, DedupConverter};
pub use crate::domain::csv::{CellValue, Dataset, Record};
pub use crate::domain::error::{AppError, Result};
pub use crate::infrastructure::config::{
    ConfigService, ConverterConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};

/// Read a CSV file, drop exact-duplicate rows and write them as a JSON array.
pub fn convert(input_path: &Path, output_path: &Path) -> Result<ConversionSummary> {
    DedupConverter::default().convert(input_path, output_path)
}
