// src/extractors/mod.rs
pub mod dedup;
pub mod patterns;
pub mod records;
pub mod statement;
pub mod window;

pub use statement::StatementExtractor;
