pub mod dedup_converter;
