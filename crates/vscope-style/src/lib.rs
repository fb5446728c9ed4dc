#![forbid(unsafe_code)]

//! Color and style primitives for Veriscope.
//!
//! This crate provides:
//! - [`Rgb`] / [`Rgba`] color types with CSS-style parsing
//! - WCAG relative luminance, contrast ratio, and AA/AAA classification
//! - [`StyleSnapshot`] for the fixed set of monitored style properties
//! - [`ChangeMask`] for tracking which properties differ between snapshots

/// Color types and CSS-style color parsing.
pub mod color;
/// WCAG luminance, contrast ratio, and conformance classification.
pub mod contrast;
/// Resolved-style snapshots and snapshot diffing.
pub mod snapshot;

pub use color::{Rgb, Rgba, parse_color};
pub use contrast::{CANVAS_DEFAULT, ContrastResult, FontMetrics, contrast_ratio, relative_luminance};
pub use snapshot::{Border, ChangeMask, Outline, Shadow, StyleSnapshot, Transform};
