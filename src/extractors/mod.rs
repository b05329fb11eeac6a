// src/extractors/mod.rs
pub mod boundary;
pub mod tables;

// Re-export key extraction types for convenience
pub use boundary::condense;
pub use tables::{parse_tables, ParsedTable};
