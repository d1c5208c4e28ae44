//!
//! The match-state reducer: folds a computed [`DeliveryOutcome`] into a fresh
//! innings snapshot and appends the history entry.
//!
//! Every transition is compute-then-replace: the calculator runs first (and
//! may reject the input), the previous innings is captured for the history,
//! and only then is a new snapshot built. A rejected delivery therefore can
//! never leave a half-applied state behind.

use crate::delivery::DeliveryInput;
use crate::engine::outcome::compute_outcome;
use crate::error::DeliveryError;
use crate::state::{AppliedDelivery, BatterSlot, Extras, Innings, MatchState};
use crate::types::{ExtraKind, PlayerId, Runs};

impl MatchState {
    /// Open an innings: zero totals, the two opening batters, the opening
    /// bowler, and an empty history.
    ///
    /// `balls_per_over` must be at least one; over and ball indices are
    /// computed by division against it throughout the kernel.
    pub fn new(
        balls_per_over: u32,
        striker: PlayerId,
        non_striker: PlayerId,
        bowler: PlayerId,
    ) -> Result<Self, DeliveryError> {
        if balls_per_over == 0 {
            return Err(DeliveryError::BallsPerOverZero);
        }
        Ok(MatchState {
            innings: Innings {
                balls_per_over,
                striker: BatterSlot::Occupied(striker),
                non_striker: BatterSlot::Occupied(non_striker),
                bowler,
                total_runs: 0,
                wickets: 0,
                legal_balls: 0,
                extras: Extras::default(),
                batters: Default::default(),
                bowlers: Default::default(),
            },
            history: Vec::new(),
        })
    }

    /// Apply one delivery, producing the next state. The previous state is
    /// untouched; it survives verbatim inside the new history entry.
    pub fn apply_delivery(&self, input: &DeliveryInput) -> Result<MatchState, DeliveryError> {
        let outcome = compute_outcome(input, &self.innings)?;

        let prior = self.innings.clone();
        let mut next = self.innings.clone();

        next.total_runs += outcome.team_runs;
        next.extras.accumulate(&outcome.extras);
        if outcome.legal {
            next.legal_balls += 1;
        }
        next.striker = outcome.striker_after;
        next.non_striker = outcome.non_striker_after;
        next.bowler = input.bowler;

        // Striker's line: runs always, the ball itself only when it counts as
        // faced.
        let batter = next.batters.entry(input.striker).or_default();
        batter.runs += outcome.batter_runs;
        if counts_as_ball_faced(input.extra, input.bat_runs) {
            batter.balls_faced += 1;
        }

        if let Some(dismissal) = &outcome.dismissal {
            next.wickets += 1;
            next.batters.entry(dismissal.player_out).or_default().out = true;
        }

        let bowler = next.bowlers.entry(input.bowler).or_default();
        if outcome.legal {
            bowler.balls += 1;
        }
        bowler.runs_conceded += outcome.bowler_runs;
        if outcome.dismissal.is_some_and(|d| d.credits_bowler) {
            bowler.wickets += 1;
        }

        tracing::debug!(
            overs = %next.overs(),
            total = next.total_runs,
            wickets = next.wickets,
            legal = outcome.legal,
            "applied delivery"
        );

        let mut history = self.history.clone();
        history.push(AppliedDelivery {
            input: *input,
            outcome,
            prior,
        });

        Ok(MatchState {
            innings: next,
            history,
        })
    }

    /// Admit the incoming batter into the slot vacated by a dismissal.
    /// Errors when both crease slots are occupied.
    pub fn replace_batter(&mut self, incoming: PlayerId) -> Result<(), DeliveryError> {
        if self.innings.striker.is_pending() {
            self.innings.striker = BatterSlot::Occupied(incoming);
            Ok(())
        } else if self.innings.non_striker.is_pending() {
            self.innings.non_striker = BatterSlot::Occupied(incoming);
            Ok(())
        } else {
            Err(DeliveryError::NoPendingBatter)
        }
    }

    /// Hand the ball to a different bowler. Their card is created lazily on
    /// their first delivery.
    pub fn set_bowler(&mut self, bowler: PlayerId) {
        self.innings.bowler = bowler;
    }
}

/// Whether the striker is charged with a ball faced: every legal delivery,
/// plus a no-ball the batter scored off. A no-ball left alone is not a ball
/// faced. Isolated here so a change of convention only touches one place.
fn counts_as_ball_faced(extra: ExtraKind, bat_runs: Runs) -> bool {
    extra.is_legal() || (extra == ExtraKind::NoBall && bat_runs.get() > 0)
}
