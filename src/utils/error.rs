// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to load document: {0}")]
    Load(String),

    #[error("Failed to extract text from page {page}: {detail}")]
    Extract { page: u32, detail: String },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    // A malformed match aborts the whole run; records are never skipped.
    #[error("Bad member data from layout pattern {pattern}: {detail}")]
    BadData { pattern: usize, detail: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document read failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
