//! Source asset type strings mapped onto the registry's coarser vocabulary.
//!
//! The collapse is lossy on purpose: every token standard becomes
//! [`AssetKind::FungibleToken`]. New source types are added here as table
//! rows, never as extra match arms elsewhere.

use super::assets_model::AssetKind;

/// Every source type string the seeder knows about.
pub const ASSET_TYPE_TABLE: &[(&str, AssetKind)] = &[
    ("ASSET_TYPE_NATIVE", AssetKind::Native),
    ("ASSET_TYPE_ERC20", AssetKind::FungibleToken),
    ("ASSET_TYPE_BEP20", AssetKind::FungibleToken),
    ("ASSET_TYPE_SPL", AssetKind::FungibleToken),
];

/// Look up the registry asset kind for a source type string.
///
/// Matching is exact. Unknown strings map to [`AssetKind::Unspecified`]
/// instead of being rejected.
pub fn asset_kind_for(source_type: &str) -> AssetKind {
    ASSET_TYPE_TABLE
        .iter()
        .find(|(name, _)| *name == source_type)
        .map(|(_, kind)| *kind)
        .unwrap_or(AssetKind::Unspecified)
}
