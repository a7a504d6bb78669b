//! Chain domain models.

use serde::{Deserialize, Serialize};

use crate::utils::non_empty;

/// A blockchain network as read from the record source.
///
/// `chain_id` is the natural key used for logging and failure reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCandidate {
    pub chain_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub chain_type: String,
    pub native_asset_symbol: String,
    pub rpc_urls: Vec<String>,
    pub block_explorer_url: String,
}

/// Payload for the registry's `CreateChain` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChainRequest {
    /// The registry addresses chains by their chain type.
    pub chain_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_url: Option<String>,
}

impl ChainCandidate {
    /// Natural key of this candidate.
    pub fn key(&self) -> &str {
        &self.chain_id
    }

    /// Build the registry request for this chain.
    pub fn to_request(&self) -> CreateChainRequest {
        CreateChainRequest {
            chain_id: self.chain_type.clone(),
            name: self.display_name.clone(),
            block_explorer_url: non_empty(&self.block_explorer_url),
        }
    }
}
