//! Declarative audit definitions.
//!
//! An [`AuditSpec`] is data: a name, a description, and a [`Check`] the
//! generic runner knows how to evaluate. New built-in checks extend the
//! `Check` enum; one-off checks use [`Check::Custom`] without touching
//! the coordinator.

use vscope_scene::{InteractionState, NodeId, Scene};

use crate::outcome::Verdict;

/// Structured failure a check can signal.
///
/// The coordinator never propagates these past its boundary; they become
/// failed outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The target node is not present in the scene.
    MissingNode(NodeId),
    /// The check could not be evaluated.
    Check(String),
}

impl core::fmt::Display for AuditError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingNode(node) => write!(f, "target node {node} not present in scene"),
            Self::Check(msg) => write!(f, "check failed: {msg}"),
        }
    }
}

impl std::error::Error for AuditError {}

/// What a custom check hands back to the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutput {
    pub verdict: Verdict,
    pub message: String,
    pub node: Option<NodeId>,
}

impl CheckOutput {
    #[must_use]
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
            node: None,
        }
    }

    /// Builder: attach the node the verdict is about.
    #[must_use]
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }
}

/// Boxed escape hatch for checks outside the built-in vocabulary.
pub type CustomCheck = Box<dyn FnMut(&mut dyn Scene) -> Result<CheckOutput, AuditError>>;

/// The check vocabulary the runner interprets.
pub enum Check {
    /// WCAG contrast of the node's text against its resolved background.
    Contrast { node: NodeId },
    /// Visible style feedback when the node enters the given state.
    StateChange {
        node: NodeId,
        state: InteractionState,
    },
    /// Scene-wide visual complexity budget.
    Complexity,
    /// Scene-wide interactive-element budget.
    FocusBudget,
    /// Caller-supplied check.
    Custom(CustomCheck),
}

impl Check {
    /// The node a check targets, when it has one.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::Contrast { node } | Self::StateChange { node, .. } => Some(*node),
            Self::Complexity | Self::FocusBudget | Self::Custom(_) => None,
        }
    }
}

impl core::fmt::Debug for Check {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Contrast { node } => f.debug_struct("Contrast").field("node", node).finish(),
            Self::StateChange { node, state } => f
                .debug_struct("StateChange")
                .field("node", node)
                .field("state", state)
                .finish(),
            Self::Complexity => write!(f, "Complexity"),
            Self::FocusBudget => write!(f, "FocusBudget"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

/// One named, declarative audit.
#[derive(Debug)]
pub struct AuditSpec {
    pub name: String,
    pub description: String,
    pub check: Check,
}

impl AuditSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, check: Check) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            check,
        }
    }

    /// Contrast audit for one node.
    #[must_use]
    pub fn contrast(name: impl Into<String>, node: NodeId) -> Self {
        Self::new(
            name,
            "text/background contrast meets WCAG AA",
            Check::Contrast { node },
        )
    }

    /// State-feedback audit for one node and state.
    #[must_use]
    pub fn state(name: impl Into<String>, node: NodeId, state: InteractionState) -> Self {
        Self::new(
            name,
            format!("{state} state produces visible style feedback"),
            Check::StateChange { node, state },
        )
    }

    /// Scene-wide visual complexity budget audit.
    #[must_use]
    pub fn complexity(name: impl Into<String>) -> Self {
        Self::new(
            name,
            "scene stays within the visual complexity budget",
            Check::Complexity,
        )
    }

    /// Scene-wide focus traversal budget audit.
    #[must_use]
    pub fn focus_budget(name: impl Into<String>) -> Self {
        Self::new(
            name,
            "interactive element count keeps focus traversal manageable",
            Check::FocusBudget,
        )
    }

    /// Custom audit from a closure.
    #[must_use]
    pub fn custom<F>(name: impl Into<String>, description: impl Into<String>, f: F) -> Self
    where
        F: FnMut(&mut dyn Scene) -> Result<CheckOutput, AuditError> + 'static,
    {
        Self::new(name, description, Check::Custom(Box::new(f)))
    }
}
