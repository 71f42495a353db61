// ============================================================
// COLUMN TYPE
// ============================================================
// One type per column, chosen from all of its non-null cells

use super::CellValue;

/// Spellings that are read as a missing value.
pub const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_VALUES: &[&str] = &["true", "True", "TRUE"];
const FALSE_VALUES: &[&str] = &["false", "False", "FALSE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnType {
    /// Pick the column type from raw cells; `None` is a missing trailing field.
    ///
    /// Null cells are ignored. The first rule every remaining cell satisfies
    /// wins: `i64`, finite `f64`, boolean literal, otherwise text. A column
    /// with no non-null cell is `Text`.
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut integer = true;
        let mut float = true;
        let mut boolean = true;
        let mut any = false;

        for raw in cells.into_iter().flatten() {
            if is_null_marker(raw) {
                continue;
            }
            any = true;
            integer = integer && raw.parse::<i64>().is_ok();
            float = float && parse_finite(raw).is_some();
            boolean = boolean && parse_bool(raw).is_some();

            if !integer && !float && !boolean {
                return ColumnType::Text;
            }
        }

        match (any, integer, float, boolean) {
            (false, ..) => ColumnType::Text,
            (true, true, ..) => ColumnType::Integer,
            (true, false, true, _) => ColumnType::Float,
            (true, false, false, true) => ColumnType::Boolean,
            _ => ColumnType::Text,
        }
    }

    /// Convert one raw cell to this column's type.
    ///
    /// Only called with the type `infer` chose for the same cells, so a
    /// non-null cell always parses; a mismatch falls back to text.
    pub fn convert(self, raw: Option<&str>) -> CellValue {
        let raw = match raw {
            Some(raw) if !is_null_marker(raw) => raw,
            _ => return CellValue::Null,
        };

        let typed = match self {
            ColumnType::Integer => raw.parse::<i64>().ok().map(CellValue::Integer),
            ColumnType::Float => parse_finite(raw).map(CellValue::Float),
            ColumnType::Boolean => parse_bool(raw).map(CellValue::Boolean),
            ColumnType::Text => None,
        };

        typed.unwrap_or_else(|| CellValue::Text(raw.to_string()))
    }
}

pub fn is_null_marker(raw: &str) -> bool {
    NULL_MARKERS.contains(&raw)
}

/// "inf" / "infinity" parse as f64 but have no JSON number form
fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_bool(raw: &str) -> Option<bool> {
    if TRUE_VALUES.contains(&raw) {
        Some(true)
    } else if FALSE_VALUES.contains(&raw) {
        Some(false)
    } else {
        None
    }
}
