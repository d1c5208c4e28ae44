//!
//! Undo and history access. Each history entry carries the innings exactly as
//! it stood before its delivery, so rollback is a verbatim restore rather than
//! an inverse computation.

use crate::state::{AppliedDelivery, MatchState};

impl MatchState {
    /// Rewind exactly one delivery. With an empty history this is a no-op,
    /// not an error: there is simply nothing to unwind.
    pub fn undo(&self) -> MatchState {
        let Some((last, rest)) = self.history.split_last() else {
            return self.clone();
        };

        tracing::debug!(
            overs = %last.prior.overs(),
            total = last.prior.total_runs,
            "undid delivery"
        );

        MatchState {
            innings: last.prior.clone(),
            history: rest.to_vec(),
        }
    }

    /// The most recently applied delivery, if any.
    pub fn last_applied(&self) -> Option<&AppliedDelivery> {
        self.history.last()
    }

    /// Number of deliveries applied since the innings opened.
    pub fn deliveries_applied(&self) -> usize {
        self.history.len()
    }
}
