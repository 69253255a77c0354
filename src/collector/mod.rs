pub mod handler;
pub mod pagination;

use std::sync::Arc;

use crate::config::types::Config;
use crate::domain::search_config::SearchConfig;
use crate::ports::blob_store::BlobStore;
use crate::ports::listings_api::ListingsApi;
use crate::ports::secret_provider::SecretProvider;

/// Fetches every search page for each operation category and stores it verbatim.
///
/// Collaborators are injected once and reused across invocations.
pub struct Collector {
    api: Arc<dyn ListingsApi>,
    store: Arc<dyn BlobStore>,
    secrets: Arc<dyn SecretProvider>,
    search: SearchConfig,
    search_endpoint: String,
    key_prefix: String,
}

impl Collector {
    pub fn new(
        api: Arc<dyn ListingsApi>,
        store: Arc<dyn BlobStore>,
        secrets: Arc<dyn SecretProvider>,
        config: &Config,
    ) -> Self {
        Self {
            api,
            store,
            secrets,
            search: config.search.clone(),
            search_endpoint: config.api.search_endpoint(),
            key_prefix: config.storage.key_prefix.clone(),
        }
    }
}
