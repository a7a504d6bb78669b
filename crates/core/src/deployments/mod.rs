//! Deployments module - per-chain contract deployments of registered assets.

mod deployments_model;

pub use deployments_model::{
    normalize_contract_address, CreateDeploymentRequest, DeploymentCandidate,
    NATIVE_ADDRESS_SENTINEL, ZERO_ADDRESS,
};
