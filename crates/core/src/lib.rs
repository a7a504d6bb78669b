//! chainreg Core - Domain entities, traits, and the seeding engine.
//!
//! This crate contains the logic that loads reference data (chains, assets
//! and per-chain asset deployments) into the registry service. It is
//! transport-agnostic and defines traits that are implemented by the
//! `connect` crate.

pub mod assets;
pub mod chains;
pub mod deployments;
pub mod errors;
pub mod registry;
pub mod seed;
pub mod source;
pub mod utils;

// Re-export common domain types
pub use assets::*;
pub use chains::*;
pub use deployments::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
