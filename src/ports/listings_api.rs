use async_trait::async_trait;

use crate::domain::credential::Credential;
use crate::error::Result;

/// Authenticated access to the paginated search API.
#[async_trait]
pub trait ListingsApi: Send + Sync {
    /// Fetch one fully-formed page URL and return the raw response body.
    async fn query(&self, credential: &Credential, url: &str) -> Result<String>;
}
