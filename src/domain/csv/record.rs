// ============================================================
// RECORD
// ============================================================
// One parsed CSV row, values aligned with the dataset header

use super::CellValue;

/// A single row of typed values
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Row index in the input (0-based, header excluded)
    index: usize,

    /// Values in header order
    values: Vec<CellValue>,
}

impl Record {
    pub fn new(index: usize, values: Vec<CellValue>) -> Self {
        Self { index, values }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn get(&self, column: usize) -> Option<&CellValue> {
        self.values.get(column)
    }
}
