//! Seeding orchestrator.
//!
//! Runs the three stages in dependency order: chains, assets, then the
//! registry asset listing, then deployments.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use tokio_util::sync::CancellationToken;

use super::outcome::{FatalError, RunOutcome, RunStep};
use super::progress::SeedProgressReporter;
use super::resolver::ResolvedAssetIndex;
use super::stage::{seed_assets, seed_chains, seed_deployments};
use crate::errors::{Error, Result};
use crate::registry::RegistryClient;
use crate::source::RecordSource;

/// Orchestrates a seeding run.
///
/// A stage that cannot begin (unreadable source, failed asset listing) or a
/// cancellation aborts the run; item failures inside a stage never do.
///
/// # Example
///
/// ```ignore
/// let orchestrator = SeedOrchestrator::new(Arc::new(NoOpProgressReporter));
/// let outcome = orchestrator.run(&source, &client).await;
/// ```
pub struct SeedOrchestrator<P: SeedProgressReporter> {
    progress_reporter: Arc<P>,
    cancel: CancellationToken,
}

impl<P: SeedProgressReporter> SeedOrchestrator<P> {
    pub fn new(progress_reporter: Arc<P>) -> Self {
        Self {
            progress_reporter,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally owned token, e.g. one cancelled on Ctrl-C.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Perform a full run: chains -> assets -> listing -> deployments.
    ///
    /// Always returns an outcome; check [`RunOutcome::is_fatal`].
    pub async fn run(&self, source: &dyn RecordSource, client: &dyn RegistryClient) -> RunOutcome {
        let mut outcome = RunOutcome::new();
        info!("Starting seeding run {}", outcome.run_id);
        self.progress_reporter.report_run_start(&outcome.run_id);

        if let Err(fatal) = self.run_internal(source, client, &mut outcome).await {
            error!("Seeding run {} aborted: {}", outcome.run_id, fatal);
            outcome.fatal = Some(fatal);
        } else {
            info!(
                "Seeding run {} completed with {} item failures",
                outcome.run_id,
                outcome.total_failed()
            );
        }

        outcome.finished_at = Some(Utc::now());
        self.progress_reporter.report_run_complete(&outcome);
        outcome
    }

    async fn run_internal(
        &self,
        source: &dyn RecordSource,
        client: &dyn RegistryClient,
        outcome: &mut RunOutcome,
    ) -> std::result::Result<(), FatalError> {
        let reporter = self.progress_reporter.as_ref();

        // Step 1: chains
        let chains = self.step(RunStep::LoadChains, source.load_chains()).await?;
        let chains_outcome = self
            .step(
                RunStep::SubmitChains,
                seed_chains(client, chains, &self.cancel, reporter),
            )
            .await?;
        outcome.stages.push(chains_outcome);

        // Step 2: assets
        let assets = self.step(RunStep::LoadAssets, source.load_assets()).await?;
        let assets_outcome = self
            .step(
                RunStep::SubmitAssets,
                seed_assets(client, assets, &self.cancel, reporter),
            )
            .await?;
        outcome.stages.push(assets_outcome);

        // Step 3: resolve symbols against everything now registered
        let index = self
            .step(RunStep::ListAssets, ResolvedAssetIndex::build(client))
            .await?;

        // Step 4: deployments
        let deployments = self
            .step(RunStep::LoadDeployments, source.load_deployments())
            .await?;
        let deployments_outcome = self
            .step(
                RunStep::SubmitDeployments,
                seed_deployments(client, &index, deployments, &self.cancel, reporter),
            )
            .await?;
        outcome.stages.push(deployments_outcome);

        Ok(())
    }

    /// Await one pipeline step, racing it against cancellation.
    async fn step<T>(
        &self,
        step: RunStep,
        fut: impl Future<Output = Result<T>>,
    ) -> std::result::Result<T, FatalError> {
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            result = fut => result,
        };
        result.map_err(|e| FatalError::new(step, e))
    }
}
