//! Operator-facing run summary.

use std::fmt::Write as _;

use chainreg_core::seed::{
    ItemOutcome, RunOutcome, SeedProgressReporter, StageKind, StageOutcome,
};

use crate::config::SummaryFormat;

/// Progress reporter that logs stage boundaries and prints the final
/// summary to stdout.
pub struct SummaryReporter {
    format: SummaryFormat,
}

impl SummaryReporter {
    pub fn new(format: SummaryFormat) -> Self {
        Self { format }
    }
}

impl SeedProgressReporter for SummaryReporter {
    fn report_run_start(&self, run_id: &str) {
        tracing::info!(run_id, "Seeding run started");
    }

    fn report_stage_start(&self, stage: StageKind, total: usize) {
        tracing::info!(stage = %stage, total, "Stage started");
    }

    fn report_item(&self, _stage: StageKind, _key: &str, _outcome: &ItemOutcome) {
        // Per-item lines are logged by the engine
    }

    fn report_stage_complete(&self, outcome: &StageOutcome) {
        tracing::info!(
            stage = %outcome.stage,
            attempted = outcome.attempted,
            created = outcome.created,
            skipped = outcome.skipped_duplicate,
            failed = outcome.failed,
            "Stage complete"
        );
    }

    fn report_run_complete(&self, outcome: &RunOutcome) {
        match self.format {
            SummaryFormat::Table => println!("{}", render_table(outcome)),
            SummaryFormat::Json => match serde_json::to_string_pretty(outcome) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!("Failed to serialize run summary: {}", e),
            },
        }
    }
}

/// Render the per-stage counts, item failures and fatal error as text.
pub fn render_table(outcome: &RunOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Seeding run {}", outcome.run_id);
    let _ = writeln!(
        out,
        "{:<12} {:>9} {:>8} {:>8} {:>7}",
        "STAGE", "ATTEMPTED", "CREATED", "SKIPPED", "FAILED"
    );

    for kind in StageKind::ALL {
        match outcome.stage(kind) {
            Some(stage) => {
                let _ = writeln!(
                    out,
                    "{:<12} {:>9} {:>8} {:>8} {:>7}",
                    kind, stage.attempted, stage.created, stage.skipped_duplicate, stage.failed
                );
            }
            None => {
                let _ = writeln!(out, "{:<12} {:>9}", kind, "not run");
            }
        }
    }

    let failures: Vec<_> = outcome.failures().collect();
    if !failures.is_empty() {
        let _ = writeln!(out, "\nFailures:");
        for failure in failures {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                failure.stage, failure.key, failure.detail
            );
        }
    }

    if let Some(fatal) = &outcome.fatal {
        let _ = writeln!(out, "\nAborted: {}", fatal);
    }

    out.trim_end().to_string()
}
