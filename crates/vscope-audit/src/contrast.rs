//! Contrast checking with ancestor background resolution.
//!
//! A node's effective background is the first painted background found
//! walking up the ancestry; past the root the canvas default (white)
//! applies. Resolution never fails: an unresolvable background is the
//! canvas, not an error.

use tracing::trace;
use vscope_scene::{NodeId, Scene};
use vscope_style::color::Rgb;
use vscope_style::contrast::{CANVAS_DEFAULT, ContrastResult, contrast_ratio};

use crate::audit::AuditError;

/// Ancestry walk limit. A well-formed scene is nowhere near this deep;
/// the cap keeps a malformed parent cycle from hanging resolution.
const MAX_ANCESTRY: usize = 4096;

/// Resolved contrast evaluation for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub result: ContrastResult,
    /// Foreground (text) paint.
    pub fg: Rgb,
    /// Effective background after ancestor resolution.
    pub bg: Rgb,
}

/// Walk ancestors to the first painted background; canvas past the root.
#[must_use]
pub fn resolve_background(scene: &dyn Scene, node: NodeId) -> Rgb {
    let mut current = Some(node);
    for _ in 0..MAX_ANCESTRY {
        let Some(id) = current else {
            return CANVAS_DEFAULT;
        };
        if let Some(snapshot) = scene.snapshot(id) {
            if snapshot.background_color.is_paint() {
                trace!(node, painted_by = id, "background resolved");
                return snapshot.background_color.to_rgb();
            }
        }
        current = scene.parent(id);
    }
    CANVAS_DEFAULT
}

/// Compute and classify the node's text contrast.
///
/// Nodes without font metrics classify as normal text.
pub fn check_contrast(scene: &dyn Scene, node: NodeId) -> Result<ContrastCheck, AuditError> {
    let snapshot = scene
        .snapshot(node)
        .ok_or(AuditError::MissingNode(node))?;
    let fg = snapshot.color.to_rgb();
    let bg = resolve_background(scene, node);
    let ratio = contrast_ratio(fg, bg);
    let large = scene
        .font(node)
        .unwrap_or_default()
        .is_large_text();
    Ok(ContrastCheck {
        result: ContrastResult::classify(ratio, large),
        fg,
        bg,
    })
}
