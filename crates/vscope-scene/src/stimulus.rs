//! Synthetic stimuli and the interaction states they provoke.
//!
//! # Invariants
//!
//! 1. Pointer stimuli follow the fixed order enter → down → up → click;
//!    a state's stimulus sequence never violates it.
//! 2. Every non-default state has a clearing sequence that returns the
//!    node to its default presentation, so probes are independent.
//! 3. `InteractionState::PROBE_ORDER` is the canonical order a full
//!    probe visits states in; it never changes between runs.

/// A synthetic event applied to a node to provoke a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stimulus {
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    Click,
    FocusGained,
    FocusLost,
    SetDisabled(bool),
    SetSelected(bool),
}

/// Visual interaction states a node can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Default,
    Hover,
    Active,
    Focus,
    Disabled,
    Selected,
}

impl InteractionState {
    /// Canonical order for a full state probe.
    pub const PROBE_ORDER: [InteractionState; 5] = [
        InteractionState::Hover,
        InteractionState::Active,
        InteractionState::Focus,
        InteractionState::Disabled,
        InteractionState::Selected,
    ];

    /// Stimuli that drive a default-state node into this state, in
    /// dispatch order.
    #[must_use]
    pub const fn stimuli(self) -> &'static [Stimulus] {
        match self {
            Self::Default => &[],
            Self::Hover => &[Stimulus::PointerEnter],
            // Active is observed during the pointer-down phase; the up and
            // click stimuli belong to the clearing sequence.
            Self::Active => &[Stimulus::PointerEnter, Stimulus::PointerDown],
            Self::Focus => &[Stimulus::FocusGained],
            Self::Disabled => &[Stimulus::SetDisabled(true)],
            Self::Selected => &[Stimulus::SetSelected(true)],
        }
    }

    /// Stimuli that return the node to its default state, in dispatch
    /// order.
    #[must_use]
    pub const fn clearing(self) -> &'static [Stimulus] {
        match self {
            Self::Default => &[],
            Self::Hover => &[Stimulus::PointerLeave],
            Self::Active => &[
                Stimulus::PointerUp,
                Stimulus::Click,
                Stimulus::PointerLeave,
            ],
            Self::Focus => &[Stimulus::FocusLost],
            Self::Disabled => &[Stimulus::SetDisabled(false)],
            Self::Selected => &[Stimulus::SetSelected(false)],
        }
    }

    /// Lowercase state name for messages and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Focus => "focus",
            Self::Disabled => "disabled",
            Self::Selected => "selected",
        }
    }
}

impl core::fmt::Display for InteractionState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
