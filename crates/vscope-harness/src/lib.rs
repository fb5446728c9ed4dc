#![forbid(unsafe_code)]

//! Test harness and reference fixtures for Veriscope.
//!
//! [`FixtureScene`] is an in-memory [`vscope_scene::Scene`] whose nodes
//! react to dispatched stimuli by swapping style snapshots, exactly the
//! way a styled document would. [`presets`] builds the canonical widget
//! fixtures the integration tests audit.

/// In-memory reactive scene graph.
pub mod fixture;
/// Canonical widget fixtures.
pub mod presets;

pub use fixture::{FixtureNode, FixtureScene};
