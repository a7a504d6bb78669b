//! chainreg Connect - HTTP access to the registry service.
//!
//! This crate implements [`chainreg_core::registry::RegistryClient`] over the
//! registry's JSON RPC endpoints.

mod client;
mod models;

pub use client::{
    RegistryApiClient, RegistryClientConfig, DEFAULT_REGISTRY_URL, REGISTRY_SERVICE,
};
