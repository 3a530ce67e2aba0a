// src/utils/mod.rs
pub mod error;
pub mod logging;
pub mod text_debug;
#[cfg(test)]
pub mod test_support;

pub use error::AppError; // Re-export main error type for convenience
