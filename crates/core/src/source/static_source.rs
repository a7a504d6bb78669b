use async_trait::async_trait;

use super::source_traits::RecordSource;
use crate::assets::AssetCandidate;
use crate::chains::ChainCandidate;
use crate::deployments::DeploymentCandidate;
use crate::errors::Result;

/// In-memory record source.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    pub chains: Vec<ChainCandidate>,
    pub assets: Vec<AssetCandidate>,
    pub deployments: Vec<DeploymentCandidate>,
}

impl StaticRecordSource {
    pub fn new(
        chains: Vec<ChainCandidate>,
        assets: Vec<AssetCandidate>,
        deployments: Vec<DeploymentCandidate>,
    ) -> Self {
        Self {
            chains,
            assets,
            deployments,
        }
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn load_chains(&self) -> Result<Vec<ChainCandidate>> {
        Ok(self.chains.clone())
    }

    async fn load_assets(&self) -> Result<Vec<AssetCandidate>> {
        Ok(self.assets.clone())
    }

    async fn load_deployments(&self) -> Result<Vec<DeploymentCandidate>> {
        Ok(self.deployments.clone())
    }
}
