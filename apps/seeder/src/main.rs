mod config;
mod main_lib;
mod summary;

use std::process::ExitCode;

use config::Config;
use main_lib::{init_tracing, run_seed};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let outcome = run_seed(&config).await?;
    if outcome.is_fatal() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
