// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to load PDF {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("PDF has no pages: {0}")]
    NoPages(PathBuf),

    #[error("First page of {0} has no extractable text layer")]
    NoTextLayer(PathBuf),

    #[error("Text extraction failed: {0}")]
    Extraction(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid date token '{token}': {source}")]
    InvalidDate {
        token: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid amount token '{0}'")]
    InvalidAmount(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reading statement failed: {0}")]
    Source(#[from] SourceError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
