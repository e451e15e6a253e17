//! The deletion flow as a pure state machine.
//!
//! ```text
//! Idle ──Requested──▶ ConfirmPending ──Confirmed──▶ Deleting ──Deleted──▶ Idle
//!                                                      │
//!                                                   Conflict
//!                                                      ▼
//!             Idle ◀──Failed── ConflictDetected ──DependentsLoaded──▶ ConflictResolved
//!                                                                       │       ▲
//!                                                          CascadeConfirmed  CascadeFailed
//!                                                                       ▼       │
//!                                  Idle ◀──CascadeCompleted── CascadeDeleting ──┘
//!                                                                       │
//!                                                                 Failed ▼
//!                                                                      Idle
//! ```
//!
//! `Cancelled` returns to `Idle` from `ConfirmPending` and `ConflictResolved`; it is ignored
//! while a request is in flight.

use crate::model::{Product, Sale};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeletionState {
    #[default]
    Idle,
    ConfirmPending {
        product: Product,
    },
    Deleting {
        product: Product,
    },
    ConflictDetected {
        product: Product,
    },
    ConflictResolved {
        product: Product,
        dependents: Vec<Sale>,
    },
    CascadeDeleting {
        product: Product,
        dependents: Vec<Sale>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeletionEvent {
    Requested(Product),
    Confirmed,
    Deleted,
    Conflict,
    /// The direct delete failed, or the dependents could not be fetched.
    Failed,
    DependentsLoaded(Vec<Sale>),
    CascadeConfirmed,
    CascadeCompleted,
    /// A cascade step failed; `remaining` are the dependents not yet deleted.
    CascadeFailed {
        remaining: Vec<Sale>,
    },
    Cancelled,
}

impl DeletionState {
    /// Returns the state after `event`, or `Err(self)` unchanged when the event is not
    /// accepted in this state.
    pub fn apply(self, event: DeletionEvent) -> Result<DeletionState, DeletionState> {
        use DeletionEvent as E;
        use DeletionState as S;

        match (self, event) {
            (S::Idle, E::Requested(product)) => Ok(S::ConfirmPending { product }),
            (S::ConfirmPending { product }, E::Confirmed) => Ok(S::Deleting { product }),
            (S::Deleting { .. }, E::Deleted | E::Failed) => Ok(S::Idle),
            (S::Deleting { product }, E::Conflict) => Ok(S::ConflictDetected { product }),
            (S::ConflictDetected { product }, E::DependentsLoaded(dependents)) => {
                Ok(S::ConflictResolved {
                    product,
                    dependents,
                })
            }
            (S::ConflictDetected { .. }, E::Failed) => Ok(S::Idle),
            (
                S::ConflictResolved {
                    product,
                    dependents,
                },
                E::CascadeConfirmed,
            ) => Ok(S::CascadeDeleting {
                product,
                dependents,
            }),
            (S::CascadeDeleting { .. }, E::CascadeCompleted | E::Failed) => Ok(S::Idle),
            (S::CascadeDeleting { product, .. }, E::CascadeFailed { remaining }) => {
                Ok(S::ConflictResolved {
                    product,
                    dependents: remaining,
                })
            }
            (S::Idle | S::ConfirmPending { .. } | S::ConflictResolved { .. }, E::Cancelled) => {
                Ok(S::Idle)
            }
            (state, _) => Err(state),
        }
    }

    /// The product this flow is about, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            DeletionState::Idle => None,
            DeletionState::ConfirmPending { product }
            | DeletionState::Deleting { product }
            | DeletionState::ConflictDetected { product }
            | DeletionState::ConflictResolved { product, .. }
            | DeletionState::CascadeDeleting { product, .. } => Some(product),
        }
    }

    /// Sales blocking the delete; empty until they are fetched.
    pub fn dependents(&self) -> &[Sale] {
        match self {
            DeletionState::ConflictResolved { dependents, .. }
            | DeletionState::CascadeDeleting { dependents, .. } => dependents,
            _ => &[],
        }
    }

    /// True while a store request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            DeletionState::Deleting { .. }
                | DeletionState::ConflictDetected { .. }
                | DeletionState::CascadeDeleting { .. }
        )
    }
}

impl fmt::Display for DeletionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeletionState::Idle => "Idle",
            DeletionState::ConfirmPending { .. } => "ConfirmPending",
            DeletionState::Deleting { .. } => "Deleting",
            DeletionState::ConflictDetected { .. } => "ConflictDetected",
            DeletionState::ConflictResolved { .. } => "ConflictResolved",
            DeletionState::CascadeDeleting { .. } => "CascadeDeleting",
        };
        f.write_str(name)
    }
}
