use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Failures of the outbound call to the APOD API.
///
/// Messages never include the request URL because it carries the API key.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request to upstream API failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("upstream API responded with HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("upstream API returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Network(err.without_url())
    }
}

#[derive(Error, Debug)]
pub enum ApodError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("upstream response is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    SchemaValidation,
    Configuration,
    Internal,
}

impl ApodError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApodError::Upstream(_) => ErrorCategory::Upstream,
            ApodError::MissingField { .. } => ErrorCategory::SchemaValidation,
            ApodError::ConfigError { .. } | ApodError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ApodError::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// Machine readable code placed in `extensions.code` of GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Upstream => "UPSTREAM_ERROR",
            ErrorCategory::SchemaValidation => "SCHEMA_VALIDATION_ERROR",
            ErrorCategory::Configuration => "CONFIGURATION_ERROR",
            ErrorCategory::Internal => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for ApodError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, ApodError>;
