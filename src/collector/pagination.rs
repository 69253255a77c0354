use serde_json::Value;
use tracing::info;

use crate::domain::credential::Credential;
use crate::domain::operation::Operation;
use crate::domain::page::{CONTENT_TYPE_JSON, blob_key, declared_total_pages};
use crate::error::{CollectorError, Result};

use super::Collector;

impl Collector {
    /// Fetch and store every page of `operation`, returning the number of pages written.
    ///
    /// The page count starts at 1 and is re-read from every response. A
    /// `max_pages` cap stops the walk early; a cap of zero or less fetches
    /// nothing. Any failure aborts the operation, leaving earlier pages stored.
    pub async fn process_operation(
        &self,
        operation: Operation,
        credential: &Credential,
        bucket: &str,
        timestamp: &str,
        max_pages: Option<i64>,
    ) -> Result<u32> {
        let limit = match max_pages {
            Some(n) if n <= 0 => {
                info!(%operation, max_pages = n, "Page limit is not positive, nothing to fetch");
                return Ok(0);
            }
            Some(n) => Some(u32::try_from(n).unwrap_or(u32::MAX)),
            None => None,
        };

        let template = self
            .search
            .build_url(&self.search_endpoint, operation.as_str());

        let mut page: u32 = 1;
        let mut total_pages: u32 = 1;

        while page <= total_pages {
            if let Some(limit) = limit
                && page > limit
            {
                info!(%operation, limit, "Reached max_pages limit, stopping");
                break;
            }

            info!(%operation, page, total_pages, "Processing page");
            let raw = self.api.query(credential, &template.for_page(page)).await?;

            let parsed: Value =
                serde_json::from_str(&raw).map_err(|source| CollectorError::InvalidResponse {
                    operation: operation.to_string(),
                    page,
                    source,
                })?;
            if let Some(declared) = declared_total_pages(&parsed) {
                total_pages = declared;
            }

            let key = blob_key(&self.key_prefix, operation, timestamp, page);
            self.store
                .put(bucket, &key, &raw, CONTENT_TYPE_JSON)
                .await?;

            page += 1;
        }

        let written = page - 1;
        info!(%operation, pages = written, "Completed operation");
        Ok(written)
    }
}
