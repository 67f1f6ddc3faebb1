//! Unified application error type.
//! All modules (db, core, storage, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Bad user input. Recoverable, never changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("Please select a {0}")]
    MissingSelection(&'static str),
}

/// Failure of the remote weather lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServiceError::new("Request timed out. Please try again.")
        } else if e.is_decode() {
            ServiceError::new(format!("Invalid response from weather service: {e}"))
        } else {
            ServiceError::new(format!("Network error: {e}"))
        }
    }
}

/// Read/write failure of a JSON-backed store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Weather service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Contact #{0} not found")]
    ContactNotFound(i64),

    #[error("No grade at position {0}")]
    GradeNotFound(usize),

    #[error("No city searched yet")]
    NoCurrentCity,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
