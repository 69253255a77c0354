use crate::error::{CollectorError, Result};

pub const BUCKET_VAR: &str = "STORAGE_BUCKET";
pub const SALE_SECRET_VAR: &str = "SALE_SECRET_ID";
pub const RENT_SECRET_VAR: &str = "RENT_SECRET_ID";

/// Per-invocation settings read from the environment at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationSettings {
    pub bucket: Option<String>,
    pub sale_secret_id: Option<String>,
    pub rent_secret_id: Option<String>,
}

/// Settings after the required-values check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub bucket: String,
    pub sale_secret_id: String,
    pub rent_secret_id: String,
}

impl InvocationSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            bucket: read(BUCKET_VAR),
            sale_secret_id: read(SALE_SECRET_VAR),
            rent_secret_id: read(RENT_SECRET_VAR),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedSettings> {
        match (&self.bucket, &self.sale_secret_id, &self.rent_secret_id) {
            (Some(bucket), Some(sale), Some(rent)) => Ok(ResolvedSettings {
                bucket: bucket.clone(),
                sale_secret_id: sale.clone(),
                rent_secret_id: rent.clone(),
            }),
            _ => Err(CollectorError::Config(format!(
                "Missing required environment variables: {BUCKET_VAR}, {SALE_SECRET_VAR}, {RENT_SECRET_VAR}"
            ))),
        }
    }
}
