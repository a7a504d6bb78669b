//! Symbol to registry identifier lookup for the deployment stage.

use std::collections::HashMap;

use log::{info, warn};

use crate::errors::Result;
use crate::registry::{RegisteredAsset, RegistryClient};

/// Failure detail for a deployment whose asset symbol is not registered.
pub const ASSET_NOT_FOUND: &str = "asset not found by symbol";

/// Maps asset symbols to registry-assigned identifiers.
///
/// Built from the registry's full asset listing, so it also covers assets
/// registered before the current run. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct ResolvedAssetIndex {
    by_symbol: HashMap<String, String>,
}

impl ResolvedAssetIndex {
    /// List every registered asset and index it by symbol.
    pub async fn build(client: &dyn RegistryClient) -> Result<Self> {
        let assets = client.list_assets().await?;
        let index = Self::from_assets(assets);
        info!("Resolved {} registry assets by symbol", index.len());
        Ok(index)
    }

    /// Index a listing. The first identifier seen for a symbol wins.
    pub fn from_assets(assets: impl IntoIterator<Item = RegisteredAsset>) -> Self {
        let mut by_symbol = HashMap::new();
        for asset in assets {
            if let Some(existing) = by_symbol.get(&asset.symbol) {
                warn!(
                    "Registry lists symbol '{}' more than once ({} and {}), keeping {}",
                    asset.symbol, existing, asset.asset_id, existing
                );
                continue;
            }
            by_symbol.insert(asset.symbol, asset.asset_id);
        }
        Self { by_symbol }
    }

    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
