use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::credential::Credential;
use crate::error::{CollectorError, Result};
use crate::ports::blob_store::BlobStore;
use crate::ports::listings_api::ListingsApi;
use crate::ports::secret_provider::SecretProvider;

type QueryFn = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;
type SecretFn = Box<dyn Fn(&str) -> Result<Credential> + Send + Sync>;

/// Search API double that records every URL and credential it is called with.
pub struct MockListingsApi {
    query_fn: Mutex<QueryFn>,
    calls: Mutex<Vec<(String, String)>>,
}

impl Default for MockListingsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockListingsApi {
    pub fn new() -> Self {
        Self {
            query_fn: Mutex::new(Box::new(|url: &str| Ok(paged_body(1, page_of(url))))),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_query(self, f: impl Fn(&str) -> Result<String> + Send + Sync + 'static) -> Self {
        *self.query_fn.lock().unwrap() = Box::new(f);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn api_keys(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, key)| key.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ListingsApi for MockListingsApi {
    async fn query(&self, credential: &Credential, url: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), credential.api_key.clone()));
        let f = self.query_fn.lock().unwrap();
        f(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub body: String,
    pub content_type: String,
}

/// In-memory blob store; optionally fails writes whose key contains a marker.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: Mutex<Vec<StoredObject>>,
    fail_marker: Option<String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects().into_iter().map(|o| o.key).collect()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, bucket: &str, key: &str, body: &str, content_type: &str) -> Result<()> {
        if let Some(marker) = &self.fail_marker
            && key.contains(marker.as_str())
        {
            return Err(CollectorError::Storage {
                key: key.to_string(),
                reason: "AccessDenied".into(),
            });
        }
        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: body.to_string(),
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

/// Secret provider double; by default returns `{id}-key` / `{id}-secret`.
pub struct MockSecretProvider {
    secret_fn: Mutex<SecretFn>,
    calls: Mutex<usize>,
}

impl Default for MockSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSecretProvider {
    pub fn new() -> Self {
        Self {
            secret_fn: Mutex::new(Box::new(|id: &str| {
                Ok(Credential::new(format!("{id}-key"), format!("{id}-secret")))
            })),
            calls: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn with_secret(
        self,
        f: impl Fn(&str) -> Result<Credential> + Send + Sync + 'static,
    ) -> Self {
        *self.secret_fn.lock().unwrap() = Box::new(f);
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SecretProvider for MockSecretProvider {
    async fn get_secret(&self, secret_id: &str) -> Result<Credential> {
        *self.calls.lock().unwrap() += 1;
        let f = self.secret_fn.lock().unwrap();
        f(secret_id)
    }
}

/// Minimal search response declaring `total_pages`.
pub fn paged_body(total_pages: u32, page: u32) -> String {
    serde_json::json!({
        "actualPage": page,
        "itemsPerPage": 50,
        "total": total_pages * 50,
        "totalPages": total_pages,
        "elementList": [{"propertyCode": format!("p{page}")}],
    })
    .to_string()
}

fn query_value<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let query = url.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

/// Page number requested by a search URL.
pub fn page_of(url: &str) -> u32 {
    query_value(url, "numPage")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Operation category requested by a search URL.
pub fn operation_of(url: &str) -> &str {
    query_value(url, "operation").unwrap_or("")
}
