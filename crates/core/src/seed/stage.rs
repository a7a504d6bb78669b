//! Stage runner: submit one record type and fold the results.

use std::future::Future;

use futures::{stream, TryStreamExt};
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use super::outcome::{ItemOutcome, StageKind, StageOutcome};
use super::progress::SeedProgressReporter;
use super::resolver::{ResolvedAssetIndex, ASSET_NOT_FOUND};
use crate::assets::AssetCandidate;
use crate::chains::ChainCandidate;
use crate::deployments::DeploymentCandidate;
use crate::errors::{Error, Result};
use crate::registry::RegistryClient;

/// Submit every chain candidate.
pub async fn seed_chains(
    client: &dyn RegistryClient,
    chains: Vec<ChainCandidate>,
    cancel: &CancellationToken,
    reporter: &dyn SeedProgressReporter,
) -> Result<StageOutcome> {
    run_stage(
        StageKind::Chains,
        chains,
        cancel,
        reporter,
        |chain: &ChainCandidate| chain.key().to_string(),
        |chain: ChainCandidate| async move {
            client
                .create_chain(chain.to_request())
                .await
                .map(ItemOutcome::from)
        },
    )
    .await
}

/// Submit every asset candidate. Candidates with a blank symbol are failed
/// locally and never reach the registry.
pub async fn seed_assets(
    client: &dyn RegistryClient,
    assets: Vec<AssetCandidate>,
    cancel: &CancellationToken,
    reporter: &dyn SeedProgressReporter,
) -> Result<StageOutcome> {
    run_stage(
        StageKind::Assets,
        assets,
        cancel,
        reporter,
        |asset: &AssetCandidate| asset.key().to_string(),
        |asset: AssetCandidate| async move {
            match asset.to_request() {
                Ok(request) => client.create_asset(request).await.map(ItemOutcome::from),
                Err(reason) => Ok(ItemOutcome::Failed(reason)),
            }
        },
    )
    .await
}

/// Submit every deployment candidate whose asset symbol resolves.
/// Unresolved symbols are recorded as failures and the stage continues.
pub async fn seed_deployments(
    client: &dyn RegistryClient,
    index: &ResolvedAssetIndex,
    deployments: Vec<DeploymentCandidate>,
    cancel: &CancellationToken,
    reporter: &dyn SeedProgressReporter,
) -> Result<StageOutcome> {
    run_stage(
        StageKind::Deployments,
        deployments,
        cancel,
        reporter,
        |deployment: &DeploymentCandidate| deployment.key(),
        |deployment: DeploymentCandidate| async move {
            let Some(asset_id) = index.resolve(&deployment.asset_symbol) else {
                return Ok(ItemOutcome::Failed(ASSET_NOT_FOUND.to_string()));
            };
            client
                .create_asset_deployment(deployment.to_request(asset_id))
                .await
                .map(ItemOutcome::from)
        },
    )
    .await
}

/// Fold candidates into a [`StageOutcome`], one submission at a time.
///
/// Item failures are folded in; an `Err` from `submit` or a cancellation
/// stops the fold and discards the partial outcome.
async fn run_stage<T, K, S, Fut>(
    stage: StageKind,
    candidates: Vec<T>,
    cancel: &CancellationToken,
    reporter: &dyn SeedProgressReporter,
    key_of: K,
    submit: S,
) -> Result<StageOutcome>
where
    K: Fn(&T) -> String,
    S: Fn(T) -> Fut,
    Fut: Future<Output = Result<ItemOutcome>>,
{
    info!("Seeding {} {}...", candidates.len(), stage);
    reporter.report_stage_start(stage, candidates.len());

    let outcome = stream::iter(candidates.into_iter().map(Ok::<T, Error>))
        .try_fold(StageOutcome::new(stage), |outcome, candidate| {
            let key = key_of(&candidate);
            let submission = submit(candidate);
            async move {
                debug!("Submitting {} '{}'", stage.record_label(), key);
                let result = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(Error::Cancelled),
                    result = submission => result,
                }?;
                log_item(stage, &key, &result);
                reporter.report_item(stage, &key, &result);
                Ok(outcome.record(key, &result))
            }
        })
        .await?;

    info!(
        "{} seeded: {} attempted, {} created, {} skipped, {} failed",
        stage, outcome.attempted, outcome.created, outcome.skipped_duplicate, outcome.failed
    );
    reporter.report_stage_complete(&outcome);
    Ok(outcome)
}

fn log_item(stage: StageKind, key: &str, outcome: &ItemOutcome) {
    match outcome {
        ItemOutcome::Created => debug!("Created {} '{}'", stage.record_label(), key),
        ItemOutcome::SkippedDuplicate => debug!(
            "{} '{}' already exists, skipping",
            stage.record_label(),
            key
        ),
        ItemOutcome::Failed(detail) => warn!(
            "Failed to create {} '{}': {}",
            stage.record_label(),
            key,
            detail
        ),
    }
}
