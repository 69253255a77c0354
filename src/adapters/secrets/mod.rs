pub mod env_provider;
pub mod file_provider;

use crate::domain::credential::Credential;
use crate::error::Result;

fn decode_credential(secret_id: &str, payload: &str) -> Result<Credential> {
    serde_json::from_str(payload).map_err(|e| {
        file_provider::secret_failure(secret_id, &format!("malformed secret payload: {e}"))
    })
}
