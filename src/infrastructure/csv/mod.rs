// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing, encoding fallback, and header normalization

mod csv_parser;
mod header;

pub use csv_parser::CsvParser;
pub use header::normalize_headers;
