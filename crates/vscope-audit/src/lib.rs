#![forbid(unsafe_code)]

//! Contrast and interaction-state verification engine.
//!
//! # Role in Veriscope
//! `vscope-audit` owns the checks and the run loop. It evaluates WCAG
//! contrast against ancestor-resolved backgrounds, drives nodes through
//! synthetic interaction states and diffs the visible result, measures
//! scene-wide complexity budgets, and coordinates declarative audit
//! suites into ordered, serializable reports.
//!
//! # Primary responsibilities
//! - **Contrast**: background resolution and AA/AAA classification.
//! - **Differ**: stimulate → snapshot → diff → restore, per state.
//! - **Coordinator**: strictly sequential runs, cooperative stop,
//!   panic containment, one outcome per definition.
//! - **Outcomes**: immutable results, summaries, text and JSON rendering.
//!
//! # How it fits in the system
//! Everything here is generic over `vscope_scene::Scene`; a live document
//! adapter and the in-memory fixtures of `vscope-harness` are
//! interchangeable underneath it.

/// Declarative audit definitions and check vocabulary.
pub mod audit;
/// Scene-wide complexity and focus budgets.
pub mod complexity;
/// Contrast checking with ancestor background resolution.
pub mod contrast;
/// Sequential run coordinator with cooperative cancellation.
pub mod coordinator;
/// Interaction state differ.
pub mod differ;
/// Outcomes, summaries, and run reports.
pub mod outcome;

pub use audit::{AuditError, AuditSpec, Check, CheckOutput, CustomCheck};
pub use complexity::ComplexityReport;
pub use contrast::{ContrastCheck, check_contrast, resolve_background};
pub use coordinator::{Coordinator, CoordinatorConfig, StopHandle};
pub use differ::{InteractionProbe, probe_state};
pub use outcome::{Outcome, RunReport, Summary, Verdict};
