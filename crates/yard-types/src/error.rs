//! Error types for yard-inventory

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Local storage errors
///
/// Never blocking: reads fall back to fresh data, writes are dropped.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage directory unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read key '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Stored value for '{key}' is malformed: {reason}")]
    Malformed { key: String, reason: String },
}

/// Manual-save validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Right seal (#2) is required when status is {status}")]
    MissingRightSeal { status: String },

    #[error("Status {status} is not valid for {slot_type}")]
    StatusNotAllowed { status: String, slot_type: String },

    #[error("Unknown trailer size: {0}")]
    UnknownSize(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read spreadsheet: {0}")]
    FileParse(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Workbook has several sheets, choose one of: {}", .0.join(", "))]
    SheetSelectionRequired(Vec<String>),

    #[error("Invalid shift: {0} (expected 1, 2 or 3)")]
    InvalidShift(u8),

    #[error("{slot_type} {number} does not exist (valid range 1..={max})")]
    SlotOutOfRange {
        slot_type: String,
        number: usize,
        max: usize,
    },

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
