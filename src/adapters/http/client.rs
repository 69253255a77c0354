use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, trace};

use crate::adapters::http::auth::Authenticator;
use crate::config::types::ApiConfig;
use crate::domain::credential::Credential;
use crate::error::{CollectorError, Result};
use crate::ports::listings_api::ListingsApi;

/// HTTP implementation of [`ListingsApi`].
///
/// Each query re-authenticates before issuing the search request.
pub struct SearchApiClient {
    http: Client,
    authenticator: Authenticator,
}

impl SearchApiClient {
    pub fn new(config: &ApiConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config.token_endpoint()))
    }

    pub fn with_client(http: Client, token_endpoint: String) -> Self {
        let authenticator = Authenticator::new(http.clone(), token_endpoint);
        Self {
            http,
            authenticator,
        }
    }
}

#[async_trait]
impl ListingsApi for SearchApiClient {
    async fn query(&self, credential: &Credential, url: &str) -> Result<String> {
        let token = self.authenticator.obtain_token(credential).await?;

        // Filters travel in the query string; the POST has no body, so no Content-Type.
        debug!(url, "Search API request");
        let response = self
            .http
            .post(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| query_failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(query_failure(format!("search returned HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| query_failure(e.to_string()))?;
        if body.is_empty() {
            return Err(query_failure(
                "Empty response from API - may have exceeded rate limit".into(),
            ));
        }

        debug!(body_len = body.len(), "Search API response received");
        trace!(body = %body, "Search API raw response");
        Ok(body)
    }
}

fn query_failure(reason: String) -> CollectorError {
    error!(reason = %reason, "Error querying API");
    CollectorError::ApiQuery { reason }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn mount_token(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"access_token":"tok-1"}"#),
            )
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> SearchApiClient {
        SearchApiClient::with_client(Client::new(), format!("{}/oauth/token", server.uri()))
    }

    fn search_url(server: &MockServer, page: u32) -> String {
        format!("{}/3.5/es/search?operation=sale&numPage={page}", server.uri())
    }

    #[tokio::test]
    async fn query_returns_raw_body() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        let body = r#"{"elementList": [{"propertyCode": "123"}], "totalPages": 1}"#;
        Mock::given(method("POST"))
            .and(path("/3.5/es/search"))
            .and(query_param("numPage", "1"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server)
            .query(&Credential::new("k", "s"), &search_url(&server, 1))
            .await
            .unwrap();
        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn query_reauthenticates_every_call() {
        let server = MockServer::start().await;
        mount_token(&server, 2).await;
        Mock::given(method("POST"))
            .and(path("/3.5/es/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(2)
            .mount(&server)
            .await;

        let api = client(&server);
        let cred = Credential::new("k", "s");
        api.query(&cred, &search_url(&server, 1)).await.unwrap();
        api.query(&cred, &search_url(&server, 2)).await.unwrap();
        // wiremock verifies expect(2) on drop
    }

    #[tokio::test]
    async fn search_request_has_no_body_or_content_type() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/3.5/es/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        client(&server)
            .query(&Credential::new("k", "s"), &search_url(&server, 1))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let search = requests
            .iter()
            .find(|r| r.url.path() == "/3.5/es/search")
            .unwrap();
        assert!(search.body.is_empty());
        assert!(!search.headers.contains_key("content-type"));
    }

    #[tokio::test]
    async fn empty_body_is_query_error() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/3.5/es/search"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = client(&server)
            .query(&Credential::new("k", "s"), &search_url(&server, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectorError::ApiQuery { .. }));
        assert!(err.to_string().contains("rate limit"));
    }

    #[tokio::test]
    async fn error_status_is_query_error() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/3.5/es/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server)
            .query(&Credential::new("k", "s"), &search_url(&server, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectorError::ApiQuery { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn auth_failure_skips_search() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/3.5/es/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server)
            .query(&Credential::new("k", "s"), &search_url(&server, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectorError::Authentication { .. }));
    }
}
