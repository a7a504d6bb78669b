use async_trait::async_trait;

use crate::assets::AssetCandidate;
use crate::chains::ChainCandidate;
use crate::deployments::DeploymentCandidate;
use crate::errors::Result;

/// Trait for loading candidate records.
///
/// Each call returns the full collection or fails; the orchestrator treats
/// any error as fatal for the run. Collections are loaded lazily, right
/// before the stage that consumes them.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load_chains(&self) -> Result<Vec<ChainCandidate>>;

    async fn load_assets(&self) -> Result<Vec<AssetCandidate>>;

    async fn load_deployments(&self) -> Result<Vec<DeploymentCandidate>>;
}
