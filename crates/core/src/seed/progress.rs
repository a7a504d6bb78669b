//! Progress reporting for seeding runs.
//!
//! Front-ends implement [`SeedProgressReporter`] to observe a run without
//! parsing log output.

use super::outcome::{ItemOutcome, RunOutcome, StageKind, StageOutcome};

/// Trait for reporting seeding progress.
pub trait SeedProgressReporter: Send + Sync {
    /// Report that a run is starting.
    fn report_run_start(&self, run_id: &str);

    /// Report that a stage is about to submit `total` candidates.
    fn report_stage_start(&self, stage: StageKind, total: usize);

    /// Report the classified result of one candidate.
    fn report_item(&self, stage: StageKind, key: &str, outcome: &ItemOutcome);

    /// Report a completed stage.
    fn report_stage_complete(&self, outcome: &StageOutcome);

    /// Report that the run finished (completed or aborted).
    fn report_run_complete(&self, outcome: &RunOutcome);
}

/// A no-op progress reporter for contexts where progress reporting is not needed.
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressReporter;

impl SeedProgressReporter for NoOpProgressReporter {
    fn report_run_start(&self, _run_id: &str) {
        // No-op
    }

    fn report_stage_start(&self, _stage: StageKind, _total: usize) {
        // No-op
    }

    fn report_item(&self, _stage: StageKind, _key: &str, _outcome: &ItemOutcome) {
        // No-op
    }

    fn report_stage_complete(&self, _outcome: &StageOutcome) {
        // No-op
    }

    fn report_run_complete(&self, _outcome: &RunOutcome) {
        // No-op
    }
}
