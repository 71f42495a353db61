// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Typed rows and the dataset they form
// No I/O, no external state

mod cell_value;
mod column_type;
mod dataset;
mod record;

pub use cell_value::CellValue;
pub use column_type::ColumnType;
pub use dataset::Dataset;
pub use record::Record;
