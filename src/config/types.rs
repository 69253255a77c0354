use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::search_config::SearchConfig;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub secrets: SecretsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_token_path")]
    pub token_path: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            country: default_country(),
            token_path: default_token_path(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn search_endpoint(&self) -> String {
        format!(
            "{}/{}/{}/search",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.country
        )
    }

    pub fn token_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.token_path)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one sub-directory per bucket.
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
    /// Prepended to every object key, e.g. `bronze/listings/`.
    #[serde(default)]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
            key_prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecretSource {
    #[default]
    File,
    Env,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecretsConfig {
    #[serde(default)]
    pub source: SecretSource,
    #[serde(default = "default_secrets_dir")]
    pub dir: PathBuf,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            source: SecretSource::default(),
            dir: default_secrets_dir(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.idealista.com".into()
}

fn default_api_version() -> String {
    "3.5".into()
}

fn default_country() -> String {
    "es".into()
}

fn default_token_path() -> String {
    "/oauth/token".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("data")
}

fn default_secrets_dir() -> PathBuf {
    PathBuf::from("secrets")
}
