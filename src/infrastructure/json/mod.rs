// ============================================================
// JSON INFRASTRUCTURE LAYER
// ============================================================
// Pretty-printed JSON export of datasets

mod json_writer;

pub use json_writer::JsonWriter;
