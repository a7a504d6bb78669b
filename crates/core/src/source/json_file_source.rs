//! Record source backed by JSON files in a data directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::source_traits::RecordSource;
use crate::assets::AssetCandidate;
use crate::chains::ChainCandidate;
use crate::deployments::DeploymentCandidate;
use crate::errors::{Error, Result};

pub const CHAINS_FILE: &str = "chains.json";
pub const ASSETS_FILE: &str = "assets.json";
pub const DEPLOYMENTS_FILE: &str = "deployments.json";

/// Reads `chains.json`, `assets.json` and `deployments.json` from a
/// directory. Each file holds a JSON array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn load_collection<T: DeserializeOwned>(
        &self,
        file_name: &str,
        collection: &str,
    ) -> Result<Vec<T>> {
        let path = self.data_dir.join(file_name);
        debug!("Reading {} records from {}", collection, path.display());

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::SourceIo(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&text).map_err(|e| Error::SourceParse {
            collection: collection.to_string(),
            message: format!("{}: {}", path.display(), e),
        })
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load_chains(&self) -> Result<Vec<ChainCandidate>> {
        self.load_collection(CHAINS_FILE, "chain").await
    }

    async fn load_assets(&self) -> Result<Vec<AssetCandidate>> {
        self.load_collection(ASSETS_FILE, "asset").await
    }

    async fn load_deployments(&self) -> Result<Vec<DeploymentCandidate>> {
        self.load_collection(DEPLOYMENTS_FILE, "deployment").await
    }
}
