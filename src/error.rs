//! Error types

use thiserror::Error;

/// Result type alias for reporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the reporter
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the API
    #[error("{status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// URL parsing error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem or console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet writer error
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The operator's input stream ended before a prompt was answered
    #[error("input closed")]
    InputClosed,
}

impl Error {
    /// Returns true for failures talking to the remote API
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Api { .. } | Error::Http(_) | Error::Json(_) | Error::Url(_)
        )
    }

    /// Returns true if the API rejected the credential (401)
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Returns true if the requested resource does not exist (404)
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }
}
