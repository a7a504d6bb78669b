use async_trait::async_trait;

use super::registry_model::{CreateOutcome, RegisteredAsset};
use crate::assets::CreateAssetRequest;
use crate::chains::CreateChainRequest;
use crate::deployments::CreateDeploymentRequest;
use crate::errors::Result;

/// Trait defining the contract for registry service calls.
///
/// Create calls report the registry's verdict as a [`CreateOutcome`]. An
/// `Err` means the run cannot continue (for example the call was
/// cancelled); transport failures for a single record are reported as
/// [`CreateOutcome::Failed`].
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn create_chain(&self, request: CreateChainRequest) -> Result<CreateOutcome>;

    async fn create_asset(&self, request: CreateAssetRequest) -> Result<CreateOutcome>;

    async fn create_asset_deployment(
        &self,
        request: CreateDeploymentRequest,
    ) -> Result<CreateOutcome>;

    /// List every asset currently registered, across all pages.
    async fn list_assets(&self) -> Result<Vec<RegisteredAsset>>;
}
