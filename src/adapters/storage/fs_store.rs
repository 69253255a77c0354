use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::{CollectorError, Result};
use crate::ports::blob_store::BlobStore;

/// Blob store backed by a local directory: `<root>/<bucket>/<key>`.
///
/// Objects are written to a temporary sibling and renamed into place, so a
/// reader never observes a partial object.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        for part in [bucket, key] {
            let relative = Path::new(part);
            if part.is_empty()
                || relative
                    .components()
                    .any(|c| !matches!(c, Component::Normal(_)))
            {
                return Err(CollectorError::Storage {
                    key: key.to_string(),
                    reason: format!("invalid object path component '{part}'"),
                });
            }
        }
        Ok(self.root.join(bucket).join(key))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, bucket: &str, key: &str, body: &str, content_type: &str) -> Result<()> {
        let path = self.object_path(bucket, key)?;
        let storage_err = |e: std::io::Error| {
            error!(key, error = %e, "Error writing object");
            CollectorError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            }
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(storage_err)?;
        }
        let tmp = path.with_extension("part");
        tokio::fs::write(&tmp, body.as_bytes())
            .await
            .map_err(storage_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(storage_err)?;

        info!(key, bucket, content_type, "Successfully uploaded object");
        Ok(())
    }
}
