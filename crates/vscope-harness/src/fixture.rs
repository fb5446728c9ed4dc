//! In-memory reactive scene graph.
//!
//! Nodes carry a base snapshot plus optional per-state snapshots; the
//! scene tracks live interaction flags (hovered, pressed, focused,
//! disabled, selected) per node and resolves the presented snapshot from
//! them. Dispatch is synchronous: the snapshot read after a dispatch
//! already reflects it.
//!
//! # Invariants
//!
//! 1. Node ids are assigned sequentially from 1, so ascending id order is
//!    document order.
//! 2. State precedence when several flags are set: disabled, pressed,
//!    focused, hovered, selected, base.
//! 3. Dispatching to an absent node is a no-op returning `false`.

use std::collections::BTreeMap;

use vscope_scene::{NodeId, Scene, Stimulus};
use vscope_style::contrast::FontMetrics;
use vscope_style::snapshot::StyleSnapshot;

/// A fixture node: base presentation plus per-state overrides.
#[derive(Debug, Clone)]
pub struct FixtureNode {
    label: String,
    font: Option<FontMetrics>,
    interactive: bool,
    base: StyleSnapshot,
    hover: Option<StyleSnapshot>,
    active: Option<StyleSnapshot>,
    focus: Option<StyleSnapshot>,
    disabled: Option<StyleSnapshot>,
    selected: Option<StyleSnapshot>,
}

impl FixtureNode {
    #[must_use]
    pub fn new(label: impl Into<String>, base: StyleSnapshot) -> Self {
        Self {
            label: label.into(),
            font: None,
            interactive: false,
            base,
            hover: None,
            active: None,
            focus: None,
            disabled: None,
            selected: None,
        }
    }

    /// Builder: set font metrics.
    #[must_use]
    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = Some(font);
        self
    }

    /// Builder: mark the node interactive.
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Builder: snapshot presented while hovered.
    #[must_use]
    pub fn on_hover(mut self, snapshot: StyleSnapshot) -> Self {
        self.hover = Some(snapshot);
        self
    }

    /// Builder: snapshot presented while pressed.
    #[must_use]
    pub fn on_active(mut self, snapshot: StyleSnapshot) -> Self {
        self.active = Some(snapshot);
        self
    }

    /// Builder: snapshot presented while focused.
    #[must_use]
    pub fn on_focus(mut self, snapshot: StyleSnapshot) -> Self {
        self.focus = Some(snapshot);
        self
    }

    /// Builder: snapshot presented while disabled.
    #[must_use]
    pub fn on_disabled(mut self, snapshot: StyleSnapshot) -> Self {
        self.disabled = Some(snapshot);
        self
    }

    /// Builder: snapshot presented while selected.
    #[must_use]
    pub fn on_selected(mut self, snapshot: StyleSnapshot) -> Self {
        self.selected = Some(snapshot);
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    hovered: bool,
    pressed: bool,
    focused: bool,
    disabled: bool,
    selected: bool,
}

#[derive(Debug)]
struct Entry {
    node: FixtureNode,
    parent: Option<NodeId>,
    flags: Flags,
}

/// In-memory scene graph of fixture nodes.
#[derive(Debug, Default)]
pub struct FixtureScene {
    entries: BTreeMap<NodeId, Entry>,
    next_id: NodeId,
    scrolled: Vec<NodeId>,
}

impl FixtureScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a node under `parent` (`None` for a root) and return its id.
    pub fn attach(&mut self, node: FixtureNode, parent: Option<NodeId>) -> NodeId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.insert(
            id,
            Entry {
                node,
                parent,
                flags: Flags::default(),
            },
        );
        id
    }

    /// Remove a node (its descendants keep dangling parent links, which
    /// resolution treats as absent).
    pub fn remove(&mut self, node: NodeId) -> bool {
        self.entries.remove(&node).is_some()
    }

    /// Ids passed to `scroll_into_view`, in call order.
    #[must_use]
    pub fn scroll_log(&self) -> &[NodeId] {
        &self.scrolled
    }

    fn presented(&self, entry: &Entry) -> StyleSnapshot {
        let node = &entry.node;
        let flags = entry.flags;
        if flags.disabled {
            return node.disabled.unwrap_or(node.base);
        }
        if flags.pressed {
            return node.active.unwrap_or(node.base);
        }
        if flags.focused {
            return node.focus.unwrap_or(node.base);
        }
        if flags.hovered {
            return node.hover.unwrap_or(node.base);
        }
        if flags.selected {
            return node.selected.unwrap_or(node.base);
        }
        node.base
    }
}

impl Scene for FixtureScene {
    fn contains(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.entries.get(&node).and_then(|e| e.parent)
    }

    fn snapshot(&self, node: NodeId) -> Option<StyleSnapshot> {
        self.entries.get(&node).map(|e| self.presented(e))
    }

    fn font(&self, node: NodeId) -> Option<FontMetrics> {
        self.entries.get(&node).and_then(|e| e.node.font)
    }

    fn label(&self, node: NodeId) -> Option<String> {
        self.entries.get(&node).map(|e| e.node.label.clone())
    }

    fn is_interactive(&self, node: NodeId) -> bool {
        self.entries
            .get(&node)
            .is_some_and(|e| e.node.interactive)
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.entries.keys().copied().collect()
    }

    fn dispatch(&mut self, node: NodeId, stimulus: Stimulus) -> bool {
        let Some(entry) = self.entries.get_mut(&node) else {
            return false;
        };
        match stimulus {
            Stimulus::PointerEnter => entry.flags.hovered = true,
            Stimulus::PointerLeave => entry.flags.hovered = false,
            Stimulus::PointerDown => entry.flags.pressed = true,
            Stimulus::PointerUp => entry.flags.pressed = false,
            // Click is an activation signal, not a presentation state.
            Stimulus::Click => {}
            Stimulus::FocusGained => entry.flags.focused = true,
            Stimulus::FocusLost => entry.flags.focused = false,
            Stimulus::SetDisabled(v) => entry.flags.disabled = v,
            Stimulus::SetSelected(v) => entry.flags.selected = v,
        }
        true
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        self.scrolled.push(node);
    }
}
