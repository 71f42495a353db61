pub mod use_cases;

pub use use_cases::dedup_converter::{ConversionSummary, DedupConverter};
