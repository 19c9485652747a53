use odyssey_core::LocationId;

use crate::model::RenderModel;
use crate::outcome::{QueryOutcome, Settled};
use crate::resolve::resolve;

/// What [`PageSession::apply`] did with a settled outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The outcome belongs to the current identifier and became current.
    Accepted,
    /// The outcome was requested for an identifier the page has left.
    Stale,
    /// The current identifier already has a terminal outcome.
    AlreadySettled,
    /// The outcome is `Pending`; nothing changed.
    StillPending,
}

/// Identifier-scoped state for one mounted page.
///
/// Holds the current identifier and the latest outcome for it. Changing the
/// identifier restarts at `Pending`; outcomes for any other identifier are
/// never allowed to replace the current view.
#[derive(Debug, Clone)]
pub struct PageSession {
    location_id: LocationId,
    outcome: QueryOutcome,
}

impl PageSession {
    /// Mounts the page for `location_id`, starting at `Pending`.
    #[must_use]
    pub fn mount(location_id: LocationId) -> Self {
        tracing::debug!(location_id = %location_id, "page mounted");
        Self {
            location_id,
            outcome: QueryOutcome::Pending,
        }
    }

    #[must_use]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    #[must_use]
    pub fn outcome(&self) -> &QueryOutcome {
        &self.outcome
    }

    /// Switches to `location_id`.
    ///
    /// Returns `true` when the identifier changed, in which case the outcome
    /// is reset to `Pending` and the caller should start a new fetch.
    /// Navigating to the current identifier is a no-op.
    pub fn navigate(&mut self, location_id: LocationId) -> bool {
        if location_id == self.location_id {
            return false;
        }
        tracing::debug!(
            from = %self.location_id,
            to = %location_id,
            "location changed, restarting at pending"
        );
        self.location_id = location_id;
        self.outcome = QueryOutcome::Pending;
        true
    }

    /// Records a settled outcome if it belongs to the current identifier.
    pub fn apply(&mut self, settled: Settled) -> Applied {
        if settled.location_id != self.location_id {
            tracing::debug!(
                current = %self.location_id,
                stale = %settled.location_id,
                "discarding outcome for stale location"
            );
            return Applied::Stale;
        }
        if self.outcome.is_terminal() {
            tracing::debug!(
                location_id = %self.location_id,
                "ignoring second outcome for settled location"
            );
            return Applied::AlreadySettled;
        }
        if !settled.outcome.is_terminal() {
            return Applied::StillPending;
        }
        self.outcome = settled.outcome;
        Applied::Accepted
    }

    /// Resolves the current identifier and outcome into a render model.
    #[must_use]
    pub fn render(&self) -> RenderModel {
        resolve(&self.location_id, &self.outcome)
    }
}
