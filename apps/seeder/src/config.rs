use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context};

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// How the run summary is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Table,
    Json,
}

pub struct Config {
    pub registry_url: String,
    pub api_token: Option<String>,
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    pub summary_format: SummaryFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let registry_url = lookup("CHAINREG_REGISTRY_URL")
            .unwrap_or_else(|| chainreg_connect::DEFAULT_REGISTRY_URL.to_string());
        if !registry_url.starts_with("http://") && !registry_url.starts_with("https://") {
            bail!("Invalid CHAINREG_REGISTRY_URL: {}", registry_url);
        }
        let api_token = lookup("CHAINREG_API_TOKEN").filter(|t| !t.trim().is_empty());
        let data_dir = lookup("CHAINREG_DATA_DIR").unwrap_or_else(|| "./data".into());
        let timeout_ms: u64 = lookup("CHAINREG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .context("Invalid CHAINREG_REQUEST_TIMEOUT_MS")?;

        let log_format = match lookup("CHAINREG_LOG_FORMAT")
            .unwrap_or_else(|| "text".into())
            .to_ascii_lowercase()
            .as_str()
        {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => bail!("Invalid CHAINREG_LOG_FORMAT: {}", other),
        };
        let summary_format = match lookup("CHAINREG_SUMMARY_FORMAT")
            .unwrap_or_else(|| "table".into())
            .to_ascii_lowercase()
            .as_str()
        {
            "table" => SummaryFormat::Table,
            "json" => SummaryFormat::Json,
            other => bail!("Invalid CHAINREG_SUMMARY_FORMAT: {}", other),
        };

        Ok(Self {
            registry_url,
            api_token,
            data_dir: PathBuf::from(data_dir),
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
            summary_format,
        })
    }
}
