//! Interaction state differ.
//!
//! Drives a node into an interaction state with that state's fixed
//! stimulus sequence, snapshots the monitored properties, diffs against
//! the default-state snapshot, then dispatches the clearing sequence so
//! the next probe starts from default again.
//!
//! # Pass rules
//!
//! | State    | Visible feedback means                         |
//! |----------|------------------------------------------------|
//! | hover    | any monitored property changed                 |
//! | active   | any change during the pointer-down phase       |
//! | focus    | outline, box-shadow, or border changed         |
//! | disabled | opacity or text color changed                  |
//! | selected | any monitored property changed                 |

use tracing::debug;
use vscope_scene::{InteractionState, NodeId, Scene};
use vscope_style::snapshot::{ChangeMask, StyleSnapshot};

use crate::audit::AuditError;

/// Observed style delta for one node in one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionProbe {
    pub node: NodeId,
    pub state: InteractionState,
    /// Snapshot taken while the state was applied.
    pub snapshot: StyleSnapshot,
    /// Properties that differ from the default-state snapshot.
    pub changes: ChangeMask,
}

impl InteractionProbe {
    /// Properties that count as feedback for this probe's state.
    #[must_use]
    pub const fn feedback_mask(state: InteractionState) -> ChangeMask {
        match state {
            InteractionState::Focus => ChangeMask::OUTLINE
                .union(ChangeMask::BOX_SHADOW)
                .union(ChangeMask::BORDER),
            InteractionState::Disabled => ChangeMask::OPACITY.union(ChangeMask::COLOR),
            // Any monitored property qualifies.
            InteractionState::Default
            | InteractionState::Hover
            | InteractionState::Active
            | InteractionState::Selected => ChangeMask(u16::MAX),
        }
    }

    /// Whether the observed changes satisfy the state's pass rule.
    #[must_use]
    pub fn shows_feedback(&self) -> bool {
        self.changes.intersects(Self::feedback_mask(self.state))
    }
}

/// Probe one state: stimulate, snapshot, diff, restore.
///
/// The probe for [`InteractionState::Active`] is taken after pointer-down
/// and before pointer-up, so feedback that only lasts while pressed still
/// counts. Style application is synchronous; no settling wait is needed
/// beyond the dispatch itself.
pub fn probe_state(
    scene: &mut dyn Scene,
    node: NodeId,
    state: InteractionState,
) -> Result<InteractionProbe, AuditError> {
    let baseline = scene
        .snapshot(node)
        .ok_or(AuditError::MissingNode(node))?;

    for stimulus in state.stimuli() {
        if !scene.dispatch(node, *stimulus) {
            return Err(AuditError::MissingNode(node));
        }
    }
    let observed = scene
        .snapshot(node)
        .ok_or(AuditError::MissingNode(node))?;
    let changes = observed.diff(&baseline);
    for stimulus in state.clearing() {
        scene.dispatch(node, *stimulus);
    }
    debug!(node, state = state.name(), ?changes, "state probed");

    Ok(InteractionProbe {
        node,
        state,
        snapshot: observed,
        changes,
    })
}
