//! Registry module - the client contract and its tagged create results.

mod registry_model;
mod registry_traits;

pub use registry_model::{CreateOutcome, RegisteredAsset, RegistryFailure, StatusCode};
pub use registry_traits::RegistryClient;
