// ============================================================
// DATASET
// ============================================================
// Ordered rows sharing one header; serializes as an array of objects

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

use super::{CellValue, Record};

/// All rows read from one input file
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names in header order
    columns: Vec<String>,

    /// Rows in input order
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record whose fields equal an earlier record's.
    ///
    /// The first occurrence is kept and relative order is preserved.
    /// Returns the input row indices of the removed records.
    pub fn remove_duplicates(&mut self) -> Vec<usize> {
        let keep: Vec<bool> = {
            let mut seen: HashSet<&[CellValue]> = HashSet::with_capacity(self.records.len());
            self.records.iter().map(|r| seen.insert(r.values())).collect()
        };

        let removed = self
            .records
            .iter()
            .zip(&keep)
            .filter(|(_, kept)| !**kept)
            .map(|(record, _)| record.index())
            .collect();

        let mut flags = keep.into_iter();
        self.records.retain(|_| flags.next().unwrap_or(false));

        removed
    }
}

/// Borrowed view that writes one record as a JSON object in column order
struct RecordObject<'a> {
    columns: &'a [String],
    record: &'a Record,
}

impl Serialize for RecordObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (idx, column) in self.columns.iter().enumerate() {
            let value = self.record.get(idx).unwrap_or(&CellValue::Null);
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(&RecordObject {
                columns: &self.columns,
                record,
            })?;
        }
        seq.end()
    }
}
