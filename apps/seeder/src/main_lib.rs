use std::sync::Arc;

use anyhow::Context;
use chainreg_connect::{RegistryApiClient, RegistryClientConfig};
use chainreg_core::seed::{RunOutcome, SeedOrchestrator};
use chainreg_core::source::JsonFileSource;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::summary::SummaryReporter;

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_client(config: &Config) -> anyhow::Result<RegistryApiClient> {
    let client_config = RegistryClientConfig {
        timeout: config.request_timeout,
        ..RegistryClientConfig::default()
    };
    RegistryApiClient::with_config(
        &config.registry_url,
        config.api_token.as_deref(),
        client_config,
    )
    .context("Failed to build registry client")
}

/// Cancel the run on Ctrl-C.
fn spawn_shutdown_listener(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Shutdown requested, cancelling seeding run");
            cancel.cancel();
        }
    });
}

pub async fn run_seed(config: &Config) -> anyhow::Result<RunOutcome> {
    let client = build_client(config)?;
    let source = JsonFileSource::new(&config.data_dir);
    tracing::info!(
        "Seeding {} from {}",
        client.base_url(),
        source.data_dir().display()
    );

    let cancel = CancellationToken::new();
    spawn_shutdown_listener(cancel.clone());

    let reporter = Arc::new(SummaryReporter::new(config.summary_format));
    let orchestrator = SeedOrchestrator::new(reporter).with_cancellation(cancel);
    Ok(orchestrator.run(&source, &client).await)
}
