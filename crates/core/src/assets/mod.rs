//! Assets module - candidate records, the registry type vocabulary, and the
//! fixed source-type collapse table.

mod asset_type_map;
mod assets_model;


pub use asset_type_map::{asset_kind_for, ASSET_TYPE_TABLE};
pub use assets_model::{AssetCandidate, AssetKind, CreateAssetRequest};
