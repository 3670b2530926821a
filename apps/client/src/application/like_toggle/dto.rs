use crate::domain::shared::errors::DomainError;
use crate::domain::social::like::LikeState;

/// Per-entity reconciliation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePhase {
    Idle,
    Pending,
}

/// What a single toggle invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server accepted the toggle; the optimistic state stands.
    Confirmed(LikeState),
    /// Confirmation failed and the pre-toggle state was restored.
    RolledBack {
        restored: LikeState,
        error: DomainError,
    },
    /// A toggle for the same entity was already in flight.
    Ignored,
    /// No credential was available; nothing changed and nothing was sent.
    Unauthenticated,
    /// The entity was never seeded into this controller.
    Untracked,
}

impl ToggleOutcome {
    pub fn state(&self) -> Option<LikeState> {
        match self {
            ToggleOutcome::Confirmed(state) => Some(*state),
            ToggleOutcome::RolledBack { restored, .. } => Some(*restored),
            _ => None,
        }
    }
}
