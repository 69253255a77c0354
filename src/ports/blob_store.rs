use async_trait::async_trait;

use crate::error::Result;

/// Durable key-value object storage; each write replaces the whole object.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, bucket: &str, key: &str, body: &str, content_type: &str) -> Result<()>;
}
