// ============================================================
// CELL VALUE
// ============================================================
// Typed scalar for a single CSV cell

use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A single typed cell value
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl CellValue {
    /// Bit pattern used for float equality; folds -0.0 into 0.0.
    fn float_bits(value: f64) -> u64 {
        if value == 0.0 {
            0.0f64.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Integer(a), CellValue::Integer(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                Self::float_bits(*a) == Self::float_bits(*b)
            }
            (CellValue::Boolean(a), CellValue::Boolean(b)) => a == b,
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Null => {}
            CellValue::Integer(v) => v.hash(state),
            CellValue::Float(v) => Self::float_bits(*v).hash(state),
            CellValue::Boolean(v) => v.hash(state),
            CellValue::Text(v) => v.hash(state),
        }
    }
}
