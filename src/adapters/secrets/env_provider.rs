use async_trait::async_trait;

use crate::domain::credential::Credential;
use crate::error::Result;
use crate::ports::secret_provider::SecretProvider;

use super::file_provider::secret_failure;

/// Reads the JSON credential payload from the environment variable named by
/// the secret id.
pub struct EnvSecretProvider<F = fn(&str) -> Option<String>> {
    lookup: F,
}

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self {
            lookup: |name| std::env::var(name).ok(),
        }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> EnvSecretProvider<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<F> SecretProvider for EnvSecretProvider<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    async fn get_secret(&self, secret_id: &str) -> Result<Credential> {
        let payload = (self.lookup)(secret_id)
            .ok_or_else(|| secret_failure(secret_id, "environment variable not set"))?;
        super::decode_credential(secret_id, &payload)
    }
}
