//! The [`Scene`] trait: the engine's whole view of a document.
//!
//! Nodes are opaque `u64` handles; the trait exposes exactly what the
//! checks need: ancestry for background resolution, style snapshots for
//! diffing, font metrics for the large-text classification, and stimulus
//! dispatch. Implementations own all presentation state; dispatch is
//! synchronous (the snapshot taken immediately after a dispatch reflects
//! it).

use vscope_style::contrast::FontMetrics;
use vscope_style::snapshot::StyleSnapshot;

use crate::stimulus::Stimulus;

/// Opaque handle to a node in a scene.
pub type NodeId = u64;

/// A live document the engine can inspect and stimulate.
pub trait Scene {
    /// Whether the node currently exists in the scene.
    fn contains(&self, node: NodeId) -> bool;

    /// Parent handle, `None` at the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Resolved snapshot of the monitored style properties.
    fn snapshot(&self, node: NodeId) -> Option<StyleSnapshot>;

    /// Font metrics of the node's text, if it renders text.
    fn font(&self, node: NodeId) -> Option<FontMetrics>;

    /// Human-readable label for messages (text content or tag).
    fn label(&self, node: NodeId) -> Option<String>;

    /// Whether the node participates in pointer/keyboard interaction.
    fn is_interactive(&self, node: NodeId) -> bool;

    /// All nodes in document order.
    fn nodes(&self) -> Vec<NodeId>;

    /// Dispatch a synthetic stimulus. Returns false when the node is
    /// absent; style effects are applied before this returns.
    fn dispatch(&mut self, node: NodeId, stimulus: Stimulus) -> bool;

    /// Bring the node into the viewport. Implementations without a
    /// viewport may treat this as a no-op.
    fn scroll_into_view(&mut self, node: NodeId);
}
