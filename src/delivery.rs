//!
//! Delivery records: the raw facts the scorer enters for one ball
//! (`DeliveryInput`), and the computed, not-yet-applied delta the calculator
//! produces from them (`DeliveryOutcome`).
//!
//! The split mirrors the engine's one-way data flow: an input is built from
//! the current state, the calculator turns it into an outcome without touching
//! anything, and only the reducer folds the outcome in.

use crate::error::DeliveryError;
use crate::state::{BatterSlot, Extras, MatchState};
use crate::types::{Boundary, ExtraKind, PlayerId, Runs, WicketKind};

// --- Input -------------------------------------------------------------------

/// The caller's description of a wicket on this delivery. Present at all means
/// a wicket happened; the fields refine how and to whom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WicketInput {
    /// How the batter was out. `None` is tolerated caller shorthand for a
    /// run-out and is normalized without a warning.
    pub kind: Option<WicketKind>,
    /// Explicit dismissed player, when the scorer identified one.
    pub player_out: Option<PlayerId>,
    /// Explicit "was it the striker" flag. Only consulted when `player_out`
    /// is absent: `Some(false)` selects the non-striker, anything else
    /// defaults to the striker.
    pub striker_out: Option<bool>,
}

/// The raw facts of one delivery, as entered. Build via
/// [`DeliveryInput::builder`], which fills positional fields from the current
/// state and clamps run counts into the valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryInput {
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub bowler: PlayerId,
    /// Completed overs at the moment of delivery. Together with
    /// `ball_in_over` this pins the input to the ball it was entered for;
    /// the calculator rejects an input whose position no longer matches the
    /// innings.
    pub over: u32,
    /// Legal balls already bowled in the current over.
    pub ball_in_over: u32,
    pub extra: ExtraKind,
    /// Runs struck off the bat (0–6).
    pub bat_runs: Runs,
    /// Additional runs: overthrows, and all runs physically taken on wides,
    /// byes, and leg-byes (0–6).
    pub additional_runs: Runs,
    pub boundary: Boundary,
    pub wicket: Option<WicketInput>,
}

impl DeliveryInput {
    /// Start a delivery from the current state. Positional fields (players at
    /// the crease, bowler, over index) come from the state; the extra kind
    /// defaults to a fair ball, the boundary flag to none, and all run counts
    /// to zero.
    ///
    /// Fails if a crease slot is still awaiting its replacement batter;
    /// admit the new batter first via [`MatchState::replace_batter`].
    pub fn builder(state: &MatchState) -> Result<DeliveryBuilder, DeliveryError> {
        let innings = &state.innings;
        let (striker, non_striker) = match (innings.striker, innings.non_striker) {
            (BatterSlot::Occupied(s), BatterSlot::Occupied(ns)) => (s, ns),
            _ => return Err(DeliveryError::BatterReplacementPending),
        };
        Ok(DeliveryBuilder {
            input: DeliveryInput {
                striker,
                non_striker,
                bowler: innings.bowler,
                over: innings.legal_balls / innings.balls_per_over,
                ball_in_over: innings.legal_balls % innings.balls_per_over,
                extra: ExtraKind::None,
                bat_runs: Runs::ZERO,
                additional_runs: Runs::ZERO,
                boundary: Boundary::None,
                wicket: None,
            },
        })
    }
}

/// Fills in the variable facts of a delivery on top of state-derived defaults.
#[derive(Debug, Clone)]
pub struct DeliveryBuilder {
    input: DeliveryInput,
}

impl DeliveryBuilder {
    pub fn extra(mut self, extra: ExtraKind) -> Self {
        self.input.extra = extra;
        self
    }

    /// Runs off the bat; out-of-range values are clamped into 0–6.
    pub fn bat_runs(mut self, runs: i64) -> Self {
        self.input.bat_runs = Runs::clamped(runs);
        self
    }

    /// Additional runs; out-of-range values are clamped into 0–6.
    pub fn additional_runs(mut self, runs: i64) -> Self {
        self.input.additional_runs = Runs::clamped(runs);
        self
    }

    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.input.boundary = boundary;
        self
    }

    pub fn wicket(mut self, wicket: WicketInput) -> Self {
        self.input.wicket = Some(wicket);
        self
    }

    pub fn build(self) -> DeliveryInput {
        self.input
    }
}

// --- Outcome -----------------------------------------------------------------

/// A wicket as normalized by the calculator: a definite kind, a definite
/// dismissed player, and whether the bowler's column takes the credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dismissal {
    pub kind: WicketKind,
    pub player_out: PlayerId,
    pub credits_bowler: bool,
}

/// The computed delta for one delivery: everything the reducer needs to fold
/// the ball into the innings, and nothing applied yet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryOutcome {
    /// Whether the ball counts toward the over.
    pub legal: bool,
    /// Runs added to the team total.
    pub team_runs: u32,
    /// Runs credited to the striker.
    pub batter_runs: u32,
    /// Per-category extras delta.
    pub extras: Extras,
    /// Runs charged against the bowler.
    pub bowler_runs: u32,
    /// The normalized wicket, if one fell.
    pub dismissal: Option<Dismissal>,
    /// Crease occupancy after strike rotation, any dismissal, and any
    /// end-of-over swap.
    pub striker_after: BatterSlot,
    pub non_striker_after: BatterSlot,
    /// Whether this ball closed the over.
    pub over_completed: bool,
    /// Non-blocking advisory messages (auto-corrections) for the scorer.
    pub warnings: Vec<String>,
}
