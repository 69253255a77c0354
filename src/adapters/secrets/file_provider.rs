use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::credential::Credential;
use crate::error::{CollectorError, Result};
use crate::ports::secret_provider::SecretProvider;

/// Reads `<dir>/<secret_id>.json` holding `{"api_key": ..., "api_secret": ...}`.
pub struct FileSecretProvider {
    dir: PathBuf,
}

impl FileSecretProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SecretProvider for FileSecretProvider {
    async fn get_secret(&self, secret_id: &str) -> Result<Credential> {
        let path = self.dir.join(format!("{secret_id}.json"));
        debug!(secret_id, path = %path.display(), "Reading secret file");

        let payload = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| secret_failure(secret_id, &e.to_string()))?;
        super::decode_credential(secret_id, &payload)
    }
}

pub(super) fn secret_failure(secret_id: &str, reason: &str) -> CollectorError {
    error!(secret_id, reason, "Error retrieving secret");
    CollectorError::SecretRetrieval {
        secret_id: secret_id.to_string(),
        reason: reason.to_string(),
    }
}
