//! Audit outcomes and run reports.
//!
//! An [`Outcome`] is the unit of result: one verdict with a diagnostic
//! message, immutable once recorded. A [`RunReport`] is the ordered
//! collection a run produces, fully replaced (never appended to) on each
//! new run.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use vscope_scene::NodeId;

/// Classification of a single audit result.
///
/// Only `Fail` fails the run. `Warn` passes with an advisory (e.g. AA
/// clears but AAA does not); `Skip` records a check gated off by
/// configuration so a run always yields one outcome per definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Skip,
    Fail,
}

impl Verdict {
    /// Everything but `Fail` counts as passing.
    #[must_use]
    pub const fn passed(self) -> bool {
        !matches!(self, Self::Fail)
    }

    /// Fixed-width tag for text rendering.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Skip => "SKIP",
            Self::Fail => "FAIL",
        }
    }
}

/// One recorded audit result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Position in the run, monotonically increasing from 0.
    pub index: usize,
    pub name: String,
    pub description: String,
    pub verdict: Verdict,
    pub message: String,
    /// Target node, when the audit had one and it existed.
    pub node: Option<NodeId>,
}

impl Outcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }
}

/// Counts over a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub skipped: usize,
    pub failed: usize,
    /// False when the run was stopped before reaching every definition.
    pub complete: bool,
}

/// Ordered outcomes of one verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    outcomes: Vec<Outcome>,
    complete: bool,
}

impl RunReport {
    #[must_use]
    pub fn new(outcomes: Vec<Outcome>, complete: bool) -> Self {
        Self { outcomes, complete }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// False when `stop()` ended the run early.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// True when no outcome failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.outcomes.len(),
            passed: 0,
            warned: 0,
            skipped: 0,
            failed: 0,
            complete: self.complete,
        };
        for outcome in &self.outcomes {
            match outcome.verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Warn => summary.warned += 1,
                Verdict::Skip => summary.skipped += 1,
                Verdict::Fail => summary.failed += 1,
            }
        }
        summary
    }

    /// Plain-text rendering: one row per outcome plus a summary line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            let _ = writeln!(
                out,
                "{:>3}. {}  {} - {}",
                outcome.index + 1,
                outcome.verdict.tag(),
                outcome.name,
                outcome.message
            );
        }
        let s = self.summary();
        let _ = write!(
            out,
            "{} checks: {} passed, {} warned, {} skipped, {} failed ({})",
            s.total,
            s.passed,
            s.warned,
            s.skipped,
            s.failed,
            if s.complete { "complete" } else { "stopped" }
        );
        out
    }

    /// Structured JSON for external report consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
