//!
//! Match state: the per-innings scoring snapshot, per-player cards, and the
//! applied-delivery history.
//!
//! `Innings` is the snapshot unit: everything the scoreboard reads, and
//! exactly what a history entry captures for undo. `MatchState` wraps one
//! `Innings` plus the append-only history; the history is the only field that
//! grows in place, every other field is replaced wholesale on each transition.

use std::collections::HashMap;

use crate::delivery::{DeliveryInput, DeliveryOutcome};
use crate::types::PlayerId;

// --- Crease slots ------------------------------------------------------------

/// One of the two batting positions at the crease.
///
/// After a dismissal the vacated slot holds `AwaitingReplacement` until the
/// caller admits the incoming batter via [`crate::MatchState::replace_batter`].
/// A tagged variant rather than a sentinel id keeps the incomplete state
/// impossible to mistake for a real player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatterSlot {
    Occupied(PlayerId),
    AwaitingReplacement,
}

impl BatterSlot {
    /// The player occupying the slot, if any.
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            BatterSlot::Occupied(id) => Some(*id),
            BatterSlot::AwaitingReplacement => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, BatterSlot::AwaitingReplacement)
    }

    /// Whether the slot is occupied by the given player.
    pub fn holds(&self, id: PlayerId) -> bool {
        self.player() == Some(id)
    }
}

// --- Extras ------------------------------------------------------------------

/// Runs conceded outside the bat, by category. Each counter is monotonically
/// non-decreasing except across an undo.
///
/// Bookkeeping convention: the wide column carries the whole wide total
/// (penalty plus runs taken); the no-ball column carries the penalty plus any
/// runs not off the bat, while runs off the bat on a no-ball stay the
/// batter's. The team total therefore always equals batter runs plus extras.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wides + self.no_balls + self.byes + self.leg_byes
    }

    /// Fold a per-delivery extras delta into the running totals.
    pub(crate) fn accumulate(&mut self, delta: &Extras) {
        self.wides += delta.wides;
        self.no_balls += delta.no_balls;
        self.byes += delta.byes;
        self.leg_byes += delta.leg_byes;
    }
}

// --- Per-player cards ---------------------------------------------------------

/// A batter's running line in the scorecard. Created lazily on first
/// involvement.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct BatterCard {
    pub runs: u32,
    pub balls_faced: u32,
    pub out: bool,
}

/// A bowler's running line. Created lazily on first delivery bowled.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct BowlerCard {
    pub balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

// --- Innings snapshot ---------------------------------------------------------

/// The full scoring state of one innings at a point in time.
///
/// This is the value captured verbatim into each history entry before a
/// delivery is folded in, which is what makes undo an exact restore.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Innings {
    /// Legal deliveries per over, fixed for the innings.
    pub balls_per_over: u32,
    pub striker: BatterSlot,
    pub non_striker: BatterSlot,
    pub bowler: PlayerId,
    pub total_runs: u32,
    /// Wickets fallen. Innings closure (the 10-wicket cap) is the caller's
    /// concern; the kernel only counts.
    pub wickets: u32,
    /// Legal deliveries bowled so far.
    pub legal_balls: u32,
    pub extras: Extras,
    pub batters: HashMap<PlayerId, BatterCard>,
    pub bowlers: HashMap<PlayerId, BowlerCard>,
}

impl Innings {
    /// Scoreboard overs display, `"<completed>.<balls into current over>"`.
    pub fn overs(&self) -> String {
        format!(
            "{}.{}",
            self.legal_balls / self.balls_per_over,
            self.legal_balls % self.balls_per_over
        )
    }

    /// Runs per over so far; 0.0 before the first legal ball.
    pub fn run_rate(&self) -> f64 {
        if self.legal_balls == 0 {
            0.0
        } else {
            self.total_runs as f64 * self.balls_per_over as f64 / self.legal_balls as f64
        }
    }

    pub fn batter_card(&self, id: PlayerId) -> Option<&BatterCard> {
        self.batters.get(&id)
    }

    pub fn bowler_card(&self, id: PlayerId) -> Option<&BowlerCard> {
        self.bowlers.get(&id)
    }
}

// --- History ------------------------------------------------------------------

/// One applied delivery in the match log: what was entered, what the
/// calculator made of it, and the innings exactly as it stood beforehand.
/// The pre-state deliberately excludes the history itself, which bounds the
/// snapshot size and avoids self-reference.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppliedDelivery {
    pub input: DeliveryInput,
    pub outcome: DeliveryOutcome,
    pub prior: Innings,
}

/// The authoritative state of one scoring session: the current innings plus
/// the ordered log of every delivery applied to reach it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchState {
    pub innings: Innings,
    /// Append-only, except that undo trims exactly one entry.
    pub history: Vec<AppliedDelivery>,
}
