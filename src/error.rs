use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Failed to retrieve credentials for secret '{secret_id}': {reason}")]
    SecretRetrieval { secret_id: String, reason: String },

    #[error("Failed to obtain OAuth token: {reason}")]
    Authentication { reason: String },

    #[error("Failed to query API: {reason}")]
    ApiQuery { reason: String },

    #[error("Invalid JSON response for {operation} page {page}: {source}")]
    InvalidResponse {
        operation: String,
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to store object '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl CollectorError {
    /// Whether this error belongs to the collector's own failure taxonomy.
    ///
    /// Everything else is reported to the invoker as an unexpected error.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::SecretRetrieval { .. }
                | Self::Authentication { .. }
                | Self::ApiQuery { .. }
                | Self::InvalidResponse { .. }
                | Self::Storage { .. }
                | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CollectorError>;
