// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV files into a typed dataset with encoding fallback

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::WINDOWS_1252;
use std::path::Path;
use tracing::{debug, warn};

use super::header::normalize_headers;
use crate::domain::csv::{ColumnType, Dataset, Record};
use crate::domain::error::{AppError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV parser producing a `Dataset`
#[derive(Debug, Clone)]
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a CSV file into a dataset
    pub fn parse_file(&self, path: &Path) -> Result<Dataset> {
        let content = self.read_with_encoding_detection(path)?;

        let dataset = self.parse_content(&content).map_err(|e| e.in_file(path))?;
        debug!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Parsed CSV file"
        );

        Ok(dataset)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::None)
            .flexible(true) // short rows are padded with nulls below
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        if headers.is_empty() {
            return Err(AppError::ParseError(
                "No columns to parse: missing header row".to_string(),
            ));
        }

        let columns = normalize_headers(&headers);

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            Self::check_width(index, columns.len(), &record)?;
            rows.push(record);
        }

        let column_types: Vec<ColumnType> = (0..columns.len())
            .map(|idx| ColumnType::infer(rows.iter().map(|row| row.get(idx))))
            .collect();
        debug!(?column_types, "Inferred column types");

        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Self::type_row(index, &column_types, row))
            .collect();

        Ok(Dataset::new(columns, records))
    }

    /// Read file bytes as UTF-8, falling back to Windows-1252
    fn read_with_encoding_detection(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| AppError::input(path, e))?;
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

        match std::str::from_utf8(body) {
            Ok(content) => Ok(content.to_string()),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Input is not valid UTF-8, decoding as Windows-1252"
                );
                let (content, _) = WINDOWS_1252.decode_without_bom_handling(body);
                Ok(content.into_owned())
            }
        }
    }

    fn check_width(index: usize, width: usize, record: &StringRecord) -> Result<()> {
        if record.len() <= width {
            return Ok(());
        }

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        Err(AppError::ParseError(format!(
            "Expected {} fields in line {}, saw {}",
            width,
            line,
            record.len()
        )))
    }

    /// Convert a raw row with the per-column types; missing fields become null
    fn type_row(index: usize, column_types: &[ColumnType], record: &StringRecord) -> Record {
        let values = column_types
            .iter()
            .enumerate()
            .map(|(idx, column_type)| column_type.convert(record.get(idx)))
            .collect();

        Record::new(index, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::CellValue;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let parser = CsvParser::new();
        let dataset = parser.parse_content(content).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), ["name", "age", "city"]);
        assert_eq!(
            dataset.records()[0].values(),
            [
                CellValue::Text("Alice".to_string()),
                CellValue::Integer(30),
                CellValue::Text("NYC".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_rows_padded_with_null() {
        let content = "a,b,c\n1,2\n";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(
            dataset.records()[0].values(),
            [CellValue::Integer(1), CellValue::Integer(2), CellValue::Null]
        );
    }

    #[test]
    fn test_column_typing_uses_every_row() {
        let content = "name,score,open\nPizza,1,true\n1920,1.0,\n1920,1,False\n";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(
            dataset.records()[1].values(),
            [
                CellValue::Text("1920".to_string()),
                CellValue::Float(1.0),
                CellValue::Null,
            ]
        );
        assert_eq!(
            dataset.records()[2].values(),
            [
                CellValue::Text("1920".to_string()),
                CellValue::Float(1.0),
                CellValue::Boolean(false),
            ]
        );
    }

    #[test]
    fn test_missing_field_does_not_change_column_type() {
        let dataset = CsvParser::new().parse_content("a,b\n1,2\n3\n").unwrap();

        assert_eq!(
            dataset.records()[1].values(),
            [CellValue::Integer(3), CellValue::Null]
        );
    }

    #[test]
    fn test_long_row_is_error() {
        let content = "a,b\n1,2\n1,2,3\n";
        let err = CsvParser::new().parse_content(content).unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_header_only() {
        let dataset = CsvParser::new().parse_content("id,name\n").unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.columns(), ["id", "name"]);
    }

    #[test]
    fn test_empty_content_is_error() {
        let err = CsvParser::new().parse_content("").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_quoted_fields() {
        let content = "name,address\n\"Joe's, Diner\",\"12 \"\"Main\"\" St\"\n";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(
            dataset.records()[0].values(),
            [
                CellValue::Text("Joe's, Diner".to_string()),
                CellValue::Text("12 \"Main\" St".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let dataset = CsvParser::new()
            .with_delimiter(b';')
            .parse_content("a;b\n1;x\n")
            .unwrap();

        assert_eq!(dataset.columns(), ["a", "b"]);
        assert_eq!(dataset.records()[0].get(0), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn test_parse_file_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.csv");
        std::fs::write(&path, b"\xEF\xBB\xBFid,name\n1,A\n").unwrap();

        let dataset = CsvParser::new().parse_file(&path).unwrap();
        assert_eq!(dataset.columns(), ["id", "name"]);
    }

    #[test]
    fn test_parse_file_windows_1252_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // 0xE9 is 'é' in Windows-1252 and invalid as UTF-8
        std::fs::write(&path, b"name\nCaf\xE9\n").unwrap();

        let dataset = CsvParser::new().parse_file(&path).unwrap();
        assert_eq!(
            dataset.records()[0].values(),
            [CellValue::Text("Café".to_string())]
        );
    }

    #[test]
    fn test_parse_missing_file() {
        let err = CsvParser::new()
            .parse_file(Path::new("/nonexistent/dir/input.csv"))
            .unwrap_err();

        assert!(matches!(err, AppError::InputError { .. }));
        assert!(err.to_string().contains("/nonexistent/dir/input.csv"));
    }
}
