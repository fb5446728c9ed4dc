//! Sequential audit run coordinator.
//!
//! Audits execute strictly one at a time, in declaration order: each one
//! mutates shared presentation state (hover, focus, scroll), so
//! concurrent execution would corrupt results. Every definition yields
//! exactly one [`Outcome`]; nothing an audit does can abort the run or
//! escape the coordinator as a fault.
//!
//! Cancellation is cooperative: a [`StopHandle`] is honored at audit
//! boundaries only, and already-recorded outcomes are never rolled back.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, info_span};
use vscope_scene::Scene;

use crate::audit::{AuditError, AuditSpec, Check, CheckOutput};
use crate::complexity::{self, COMPLEXITY_NOTE, COMPLEXITY_WARN, FOCUS_BUDGET};
use crate::contrast::check_contrast;
use crate::differ::probe_state;
use crate::outcome::{Outcome, RunReport, Verdict};

/// Options gating optional phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Scroll each audit's target into view before evaluating.
    pub auto_scroll: bool,
    /// Evaluate contrast audits (skipped, not dropped, when off).
    pub check_contrast: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            check_contrast: true,
        }
    }
}

/// Cloneable handle that requests cancellation of the current run.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request a stop after the currently executing audit completes.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-session run coordinator.
///
/// Holds its own run state (config, stop flag, retained last report)
/// so independent sessions never share residue.
#[derive(Debug)]
pub struct Coordinator {
    config: CoordinatorConfig,
    stop: Arc<AtomicBool>,
    last: Option<RunReport>,
}

impl Coordinator {
    #[must_use]
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            config,
            stop: Arc::new(AtomicBool::new(false)),
            last: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> CoordinatorConfig {
        self.config
    }

    /// Handle for cancelling the run from elsewhere (a key binding, a
    /// scripted caller).
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    /// The retained report of the most recent run, if any.
    #[must_use]
    pub fn last_report(&self) -> Option<&RunReport> {
        self.last.as_ref()
    }

    /// Run every audit in declaration order and retain the report.
    ///
    /// The stop flag is cleared on entry, so a handle left over from a
    /// cancelled run does not poison the next one.
    pub fn run(&mut self, scene: &mut dyn Scene, audits: &mut [AuditSpec]) -> &RunReport {
        let span = info_span!("audit_run", audits = audits.len());
        let _guard = span.enter();
        self.stop.store(false, Ordering::Relaxed);

        let mut outcomes = Vec::with_capacity(audits.len());
        let mut complete = true;
        for audit in audits.iter_mut() {
            if self.stop.load(Ordering::Relaxed) {
                info!(recorded = outcomes.len(), "run stopped");
                complete = false;
                break;
            }
            let index = outcomes.len();
            debug!(index, name = %audit.name, "evaluating audit");
            outcomes.push(self.evaluate(scene, audit, index));
        }

        let failed = outcomes.iter().filter(|o| !o.passed()).count();
        info!(total = outcomes.len(), failed, complete, "run finished");
        self.last.insert(RunReport::new(outcomes, complete))
    }

    fn evaluate(&self, scene: &mut dyn Scene, audit: &mut AuditSpec, index: usize) -> Outcome {
        if matches!(audit.check, Check::Contrast { .. }) && !self.config.check_contrast {
            return self.outcome(
                audit,
                index,
                CheckOutput::new(Verdict::Skip, "contrast checks disabled by configuration"),
            );
        }

        if self.config.auto_scroll {
            if let Some(node) = audit.check.target() {
                scene.scroll_into_view(node);
            }
        }

        let evaluated = catch_unwind(AssertUnwindSafe(|| evaluate_check(scene, &mut audit.check)));
        let output = match evaluated {
            Ok(Ok(output)) => output,
            Ok(Err(error)) => CheckOutput {
                verdict: Verdict::Fail,
                message: error.to_string(),
                node: audit.check.target(),
            },
            Err(panic) => CheckOutput {
                verdict: Verdict::Fail,
                message: format!("audit panicked: {}", panic_message(&panic)),
                node: audit.check.target(),
            },
        };
        self.outcome(audit, index, output)
    }

    fn outcome(&self, audit: &AuditSpec, index: usize, output: CheckOutput) -> Outcome {
        Outcome {
            index,
            name: audit.name.clone(),
            description: audit.description.clone(),
            verdict: output.verdict,
            message: output.message,
            node: output.node,
        }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(CoordinatorConfig::default())
    }
}

fn evaluate_check(scene: &mut dyn Scene, check: &mut Check) -> Result<CheckOutput, AuditError> {
    match check {
        Check::Contrast { node } => {
            let node = *node;
            let checked = check_contrast(scene, node)?;
            let r = checked.result;
            let subject = scene
                .label(node)
                .unwrap_or_else(|| format!("node {node}"));
            let text_kind = if r.is_large_text { "large" } else { "normal" };
            let message = format!(
                "contrast {:.2}:1 for '{subject}' ({text_kind} text, AA {}, AAA {})",
                r.ratio,
                pass_word(r.passes_aa),
                pass_word(r.passes_aaa),
            );
            let verdict = if !r.passes_aa {
                Verdict::Fail
            } else if !r.passes_aaa {
                Verdict::Warn
            } else {
                Verdict::Pass
            };
            Ok(CheckOutput::new(verdict, message).with_node(node))
        }
        Check::StateChange { node, state } => {
            let (node, state) = (*node, *state);
            let probe = probe_state(scene, node, state)?;
            if probe.shows_feedback() {
                let changed = probe.changes.property_names().join(", ");
                Ok(
                    CheckOutput::new(Verdict::Pass, format!("{state} feedback: {changed} changed"))
                        .with_node(node),
                )
            } else {
                Ok(CheckOutput::new(
                    Verdict::Fail,
                    format!("no visible {state} feedback in monitored properties"),
                )
                .with_node(node))
            }
        }
        Check::Complexity => {
            let report = complexity::measure(scene);
            let message = format!(
                "complexity {:.1}/100 ({} elements, {} colors, {} fonts, {} interactive)",
                report.score,
                report.element_count,
                report.distinct_colors,
                report.distinct_fonts,
                report.interactive_count,
            );
            let verdict = if report.score > COMPLEXITY_WARN {
                Verdict::Warn
            } else {
                Verdict::Pass
            };
            let message = if report.score > COMPLEXITY_WARN {
                format!("{message}; exceeds the recommended budget")
            } else if report.score > COMPLEXITY_NOTE {
                format!("{message}; acceptable")
            } else {
                message
            };
            Ok(CheckOutput::new(verdict, message))
        }
        Check::FocusBudget => {
            let count = scene
                .nodes()
                .into_iter()
                .filter(|n| scene.is_interactive(*n))
                .count();
            if count > FOCUS_BUDGET {
                Ok(CheckOutput::new(
                    Verdict::Warn,
                    format!(
                        "{count} interactive elements make keyboard traversal difficult (budget {FOCUS_BUDGET})"
                    ),
                ))
            } else {
                Ok(CheckOutput::new(
                    Verdict::Pass,
                    format!("{count} interactive elements within budget"),
                ))
            }
        }
        Check::Custom(f) => f(scene),
    }
}

const fn pass_word(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
