use async_trait::async_trait;

use crate::domain::credential::Credential;
use crate::error::Result;

#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn get_secret(&self, secret_id: &str) -> Result<Credential>;
}
