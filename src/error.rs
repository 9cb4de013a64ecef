use thiserror::Error;

/// Outcome of a lookup that did not produce a record.
///
/// Both variants are expected, user-facing results reported as 4xx JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Cargo code is required. Use ?code=CARGO_CODE")]
    MissingParameter,

    #[error("Cargo with code '{code}' not found")]
    NotFound { code: String },
}

impl LookupError {
    /// Short label used as `error` in the JSON body.
    pub fn label(&self) -> &'static str {
        match self {
            LookupError::MissingParameter => "Missing Parameter",
            LookupError::NotFound { .. } => "Not Found",
        }
    }

    pub fn status(&self) -> http::StatusCode {
        match self {
            LookupError::MissingParameter => http::StatusCode::BAD_REQUEST,
            LookupError::NotFound { .. } => http::StatusCode::NOT_FOUND,
        }
    }
}

/// Failures while turning a handler result into an HTTP response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP response error: {0}")]
    Http(#[from] http::Error),
}

/// Invalid server configuration read from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
