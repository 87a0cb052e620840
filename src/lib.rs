//! HP ds62 code generator library
//!
//! A Rust library for converting the Holland & Powell `tc-ds62.txt`
//! thermodynamic dataset into generated BurnMan endmember definitions.
//!
//! This library provides tools for:
//! - Reading the whitespace-tokenized dataset into rows
//! - Extracting endmember records through a fixed row/column schema
//! - Resolving order/disorder corrections from the dataset flag
//! - Rebuilding the symmetric enthalpy covariance matrix
//! - Emitting the generated Python module with SI unit conversions

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod code_emitter;
        pub mod covariance;
        pub mod dataset_reader;
        pub mod record_extractor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Correction, CovarianceMatrix, Dataset, Endmember};
pub use config::Config;

/// Result type alias for the code generator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input dataset file does not exist
    #[error("Input dataset not found: {path}")]
    MissingInput { path: String },

    /// No record header matches the requested name
    #[error("Record not found: {name}")]
    RecordNotFound { name: String },

    /// A token is missing or cannot be parsed
    #[error("Malformed field in record '{record}' (row offset {row}, column {column}): {message}")]
    MalformedField {
        record: String,
        row: usize,
        column: usize,
        message: String,
    },

    /// Component index outside the recognized component table
    #[error("Unknown component index {index} in record '{record}'")]
    UnknownComponent { record: String, index: i64 },

    /// Correction flag without a supported model
    #[error("Unsupported correction flag {flag} in record '{record}'")]
    UnsupportedCorrection { record: String, flag: i32 },

    /// Covariance value count does not fill an upper triangle
    #[error("Covariance data has {found} values, expected {expected} for the upper triangle")]
    CovarianceShape { expected: usize, found: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a missing input error
    pub fn missing_input(path: impl Into<String>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a record not found error
    pub fn record_not_found(name: impl Into<String>) -> Self {
        Self::RecordNotFound { name: name.into() }
    }

    /// Create a malformed field error
    pub fn malformed_field(
        record: impl Into<String>,
        row: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            record: record.into(),
            row,
            column,
            message: message.into(),
        }
    }

    /// Create an unknown component error
    pub fn unknown_component(record: impl Into<String>, index: i64) -> Self {
        Self::UnknownComponent {
            record: record.into(),
            index,
        }
    }

    /// Create an unsupported correction error
    pub fn unsupported_correction(record: impl Into<String>, flag: i32) -> Self {
        Self::UnsupportedCorrection {
            record: record.into(),
            flag,
        }
    }

    /// Create a covariance shape error
    pub fn covariance_shape(expected: usize, found: usize) -> Self {
        Self::CovarianceShape { expected, found }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
