//! Per-stage and per-run outcome aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::Error;
use crate::registry::CreateOutcome;

/// The three record types, in the order they are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Chains,
    Assets,
    Deployments,
}

impl StageKind {
    pub const ALL: [StageKind; 3] = [StageKind::Chains, StageKind::Assets, StageKind::Deployments];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Chains => "chains",
            StageKind::Assets => "assets",
            StageKind::Deployments => "deployments",
        }
    }

    /// Singular record name, for log lines.
    pub fn record_label(&self) -> &'static str {
        match self {
            StageKind::Chains => "chain",
            StageKind::Assets => "asset",
            StageKind::Deployments => "deployment",
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classified result of one candidate. There is no partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Created,
    SkippedDuplicate,
    Failed(String),
}

impl From<CreateOutcome> for ItemOutcome {
    fn from(outcome: CreateOutcome) -> Self {
        match outcome {
            CreateOutcome::Created { .. } => ItemOutcome::Created,
            CreateOutcome::Conflict { .. } => ItemOutcome::SkippedDuplicate,
            CreateOutcome::Failed(failure) => ItemOutcome::Failed(failure.to_string()),
        }
    }
}

/// A failed candidate, identified by its natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFailure {
    pub stage: StageKind,
    pub key: String,
    pub detail: String,
}

/// Counters for one stage.
///
/// Built by folding [`ItemOutcome`]s with [`StageOutcome::record`], so
/// `created + skipped_duplicate + failed == attempted` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOutcome {
    pub stage: StageKind,
    pub attempted: usize,
    pub created: usize,
    pub skipped_duplicate: usize,
    pub failed: usize,
    pub failures: Vec<ItemFailure>,
}

impl StageOutcome {
    pub fn new(stage: StageKind) -> Self {
        Self {
            stage,
            attempted: 0,
            created: 0,
            skipped_duplicate: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    /// Fold one item result into the counters.
    pub fn record(mut self, key: impl Into<String>, outcome: &ItemOutcome) -> Self {
        self.attempted += 1;
        match outcome {
            ItemOutcome::Created => self.created += 1,
            ItemOutcome::SkippedDuplicate => self.skipped_duplicate += 1,
            ItemOutcome::Failed(detail) => {
                self.failed += 1;
                self.failures.push(ItemFailure {
                    stage: self.stage,
                    key: key.into(),
                    detail: detail.clone(),
                });
            }
        }
        self
    }

    pub fn is_conserved(&self) -> bool {
        self.created + self.skipped_duplicate + self.failed == self.attempted
    }
}

/// Pipeline step a fatal error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStep {
    LoadChains,
    SubmitChains,
    LoadAssets,
    SubmitAssets,
    ListAssets,
    LoadDeployments,
    SubmitDeployments,
}

impl std::fmt::Display for RunStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RunStep::LoadChains => "loading chains",
            RunStep::SubmitChains => "submitting chains",
            RunStep::LoadAssets => "loading assets",
            RunStep::SubmitAssets => "submitting assets",
            RunStep::ListAssets => "listing registry assets",
            RunStep::LoadDeployments => "loading deployments",
            RunStep::SubmitDeployments => "submitting deployments",
        };
        f.pad(label)
    }
}

/// An error that aborted the run.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{step} failed: {message}")]
#[serde(rename_all = "camelCase")]
pub struct FatalError {
    pub step: RunStep,
    pub message: String,
    pub cancelled: bool,
}

impl FatalError {
    pub fn new(step: RunStep, error: Error) -> Self {
        Self {
            step,
            cancelled: error.is_cancelled(),
            message: error.to_string(),
        }
    }
}

/// Summary of a whole run.
///
/// `stages` only holds stages that completed; a stage interrupted by a
/// fatal error contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub stages: Vec<StageOutcome>,
    pub fatal: Option<FatalError>,
}

impl RunOutcome {
    pub fn new() -> Self {
        Self {
            run_id: uuid::Uuid::now_v7().to_string(),
            started_at: Utc::now(),
            finished_at: None,
            stages: Vec::new(),
            fatal: None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }

    pub fn stage(&self, kind: StageKind) -> Option<&StageOutcome> {
        self.stages.iter().find(|s| s.stage == kind)
    }

    /// Attempted count for a stage; zero when the stage never completed.
    pub fn attempted(&self, kind: StageKind) -> usize {
        self.stage(kind).map(|s| s.attempted).unwrap_or(0)
    }

    /// Flat list of item failures across all completed stages.
    pub fn failures(&self) -> impl Iterator<Item = &ItemFailure> {
        self.stages.iter().flat_map(|s| s.failures.iter())
    }

    pub fn total_failed(&self) -> usize {
        self.stages.iter().map(|s| s.failed).sum()
    }
}

impl Default for RunOutcome {
    fn default() -> Self {
        Self::new()
    }
}
