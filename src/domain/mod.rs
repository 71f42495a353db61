pub mod error;

// Parsed CSV data
pub mod csv;
