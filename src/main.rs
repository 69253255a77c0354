use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use listings_collector::adapters::http::client::SearchApiClient;
use listings_collector::adapters::secrets::env_provider::EnvSecretProvider;
use listings_collector::adapters::secrets::file_provider::FileSecretProvider;
use listings_collector::adapters::storage::fs_store::FsBlobStore;
use listings_collector::collector::Collector;
use listings_collector::config::load_config;
use listings_collector::config::settings::InvocationSettings;
use listings_collector::config::types::SecretSource;
use listings_collector::domain::invocation::{InvocationEvent, InvocationResponse};
use listings_collector::ports::secret_provider::SecretProvider;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        binary_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

async fn read_event() -> Result<InvocationEvent> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("failed to read invocation event from stdin")?;
    InvocationEvent::parse(&input).context("invocation event is not valid JSON")
}

fn build_collector() -> Result<Collector> {
    let config = load_config(&find_config_path())?;

    let api = Arc::new(SearchApiClient::new(&config.api).context("failed to build HTTP client")?);
    let store = Arc::new(FsBlobStore::new(config.storage.root.clone()));
    let secrets: Arc<dyn SecretProvider> = match config.secrets.source {
        SecretSource::File => Arc::new(FileSecretProvider::new(config.secrets.dir.clone())),
        SecretSource::Env => Arc::new(EnvSecretProvider::new()),
    };
    Ok(Collector::new(api, store, secrets, &config))
}

async fn invoke() -> InvocationResponse {
    let prepared = match build_collector() {
        Ok(collector) => read_event().await.map(|event| (collector, event)),
        Err(e) => Err(e),
    };
    match prepared {
        Ok((collector, event)) => {
            collector
                .handle(&event, &InvocationSettings::from_env())
                .await
        }
        Err(e) => {
            tracing::error!(error = ?e, "Unexpected error");
            InvocationResponse::unexpected(&format!("{e:#}"))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the response envelope
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting listings collector");

    let response = invoke().await;
    println!("{}", serde_json::to_string(&response)?);
    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
