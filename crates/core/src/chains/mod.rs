//! Chains module - candidate records and the registry request shape.

mod chains_model;

pub use chains_model::{ChainCandidate, CreateChainRequest};
