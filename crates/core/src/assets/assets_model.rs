//! Asset domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::asset_type_map::asset_kind_for;
use crate::utils::non_empty_opt;

/// Registry asset type. Serialized with the registry's enum names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssetKind {
    #[serde(rename = "ASSET_TYPE_NATIVE")]
    Native,
    #[serde(rename = "ASSET_TYPE_FUNGIBLE_TOKEN")]
    FungibleToken,
    #[default]
    #[serde(rename = "ASSET_TYPE_UNSPECIFIED")]
    Unspecified,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Native => "ASSET_TYPE_NATIVE",
            AssetKind::FungibleToken => "ASSET_TYPE_FUNGIBLE_TOKEN",
            AssetKind::Unspecified => "ASSET_TYPE_UNSPECIFIED",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A tradable asset as read from the record source.
///
/// `symbol` is the natural key (case-sensitive). `id` is source-local and
/// only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCandidate {
    #[serde(default)]
    pub id: String,
    pub symbol: String,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Raw source type string, e.g. `ASSET_TYPE_ERC20`.
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default, rename = "coingecko_id")]
    pub external_reference_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// Payload for the registry's `CreateAsset` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl AssetCandidate {
    /// Natural key of this candidate.
    pub fn key(&self) -> &str {
        &self.symbol
    }

    /// Registry asset kind after the fixed collapse.
    pub fn asset_kind(&self) -> AssetKind {
        asset_kind_for(&self.source_type)
    }

    /// Build the registry request for this asset.
    ///
    /// Fails when the symbol is blank; such a candidate is never submitted.
    pub fn to_request(&self) -> Result<CreateAssetRequest, String> {
        if self.symbol.trim().is_empty() {
            return Err(format!(
                "asset symbol must not be empty (source id '{}')",
                self.id
            ));
        }

        Ok(CreateAssetRequest {
            symbol: self.symbol.clone(),
            name: self.display_name.clone(),
            asset_type: self.asset_kind(),
            category: non_empty_opt(self.category.as_deref()),
            description: non_empty_opt(self.description.as_deref()),
            logo_url: non_empty_opt(self.logo_url.as_deref()),
        })
    }
}
