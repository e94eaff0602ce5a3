//! Error types for the Splitwise exporter
//!
//! Every failure in the export pipeline is fatal except "group not found",
//! which is not an error at all but an outcome (see `core::exporter`).
//! Errors carry enough context to be printed directly on the command line.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: Missing credentials in the environment
//! - **Remote Errors**: Transport failures and non-success API responses
//! - **Decode Errors**: Payloads that don't match the expected shape
//! - **Output Errors**: File creation and write failures

use thiserror::Error;

/// Main error type for the exporter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// A required environment variable is unset or empty
    #[error("Missing required environment variable: {key}")]
    MissingConfig {
        /// Name of the variable
        key: String,
    },

    /// The HTTP request could not be completed (DNS, TLS, connection reset, ...)
    #[error("HTTP error: {message}")]
    Http {
        /// Description of the transport failure
        message: String,
    },

    /// The service answered with a non-success status
    ///
    /// Covers authentication failures (401), forbidden groups (403)
    /// and rate limiting (429).
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error text reported by the service, or the raw body
        message: String,
    },

    /// The response body could not be decoded
    ///
    /// This includes expenses without a category.
    #[error("Failed to decode {endpoint} response: {message}")]
    Decode {
        /// Endpoint whose payload was rejected
        endpoint: String,
        /// Description of the decoding failure
        message: String,
    },

    /// I/O error occurred while writing the output file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization failed
    #[error("CSV error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },
}

// Conversion from io::Error to ExportError
impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ExportError
impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::CsvError {
            message: error.to_string(),
        }
    }
}

// Conversion from reqwest::Error to ExportError
impl From<reqwest::Error> for ExportError {
    fn from(error: reqwest::Error) -> Self {
        ExportError::Http {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ExportError {
    /// Create a MissingConfig error
    pub fn missing_config(key: &str) -> Self {
        ExportError::MissingConfig {
            key: key.to_string(),
        }
    }

    /// Create an Api error
    pub fn api(status: u16, message: &str) -> Self {
        ExportError::Api {
            status,
            message: message.to_string(),
        }
    }

    /// Create a Decode error from a serde_json failure
    pub fn decode(endpoint: &str, error: &serde_json::Error) -> Self {
        ExportError::Decode {
            endpoint: endpoint.to_string(),
            message: error.to_string(),
        }
    }
}
