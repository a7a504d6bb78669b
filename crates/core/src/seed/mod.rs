//! Seeding engine - stages, reference resolution, orchestration, outcomes.

mod orchestrator;
mod outcome;
mod progress;
mod resolver;
mod stage;

pub use orchestrator::SeedOrchestrator;
pub use outcome::{
    FatalError, ItemFailure, ItemOutcome, RunOutcome, RunStep, StageKind, StageOutcome,
};
pub use progress::{NoOpProgressReporter, SeedProgressReporter};
pub use resolver::{ResolvedAssetIndex, ASSET_NOT_FOUND};
pub use stage::{seed_assets, seed_chains, seed_deployments};
