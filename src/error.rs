//! Error types for the `stylescan` crate.

use thiserror::Error;

/// Errors that can occur when requesting or decoding image annotations.
#[derive(Debug, Error)]
pub enum VisionError {
    /// The request never reached the vision service (connection, DNS, TLS).
    #[error("failed to reach the vision service")]
    Transport {
        /// The underlying HTTP client error.
        source: reqwest::Error,
    },

    /// The vision service responded with a non-success status.
    #[error("Vision API error: {message}")]
    Api {
        /// The service-reported message, or `"Unknown error"` if none was given.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode vision response")]
    Decode {
        /// The underlying deserialization error.
        source: reqwest::Error,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request URL could not be constructed.
    #[error("failed to construct request URL")]
    Url {
        /// The underlying URL parse error.
        source: url::ParseError,
    },
}

/// A convenience result type for vision operations.
pub type Result<T> = std::result::Result<T, VisionError>;
