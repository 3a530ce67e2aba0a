// src/source/mod.rs
pub mod pdf;

pub use pdf::read_first_page_lines;
