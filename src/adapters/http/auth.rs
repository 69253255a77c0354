use base64::Engine as _;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, error};
use url::Url;

use crate::domain::credential::{AccessToken, Credential};
use crate::error::{CollectorError, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth client-credentials exchange against the API's token endpoint.
///
/// Every call performs a fresh exchange; tokens are not cached.
pub struct Authenticator {
    http: Client,
    token_endpoint: String,
}

impl Authenticator {
    pub fn new(http: Client, token_endpoint: String) -> Self {
        Self {
            http,
            token_endpoint,
        }
    }

    pub async fn obtain_token(&self, credential: &Credential) -> Result<AccessToken> {
        let mut url = Url::parse(&self.token_endpoint)
            .map_err(|e| auth_failure(&format!("invalid token endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("grant_type", "client_credentials")
            .append_pair("scope", "read");

        debug!(endpoint = %self.token_endpoint, "Requesting OAuth token");

        let response = self
            .http
            .post(url.as_str())
            .header(AUTHORIZATION, basic_auth_header(credential))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| auth_failure(&e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(auth_failure(&format!("token endpoint returned HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| auth_failure(&e.to_string()))?;
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| auth_failure(&format!("unexpected token response: {e}")))?;

        Ok(AccessToken::new(token.access_token))
    }
}

pub fn basic_auth_header(credential: &Credential) -> String {
    let pair = format!("{}:{}", credential.api_key, credential.api_secret);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(pair)
    )
}

fn auth_failure(reason: &str) -> CollectorError {
    error!(reason, "Error obtaining OAuth token");
    CollectorError::Authentication {
        reason: reason.to_string(),
    }
}
