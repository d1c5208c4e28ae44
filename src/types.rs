//!
//! Shared small types for the scoring kernel: player identity, validated run
//! counts, and the closed enums describing one delivery (extra kind, boundary
//! flag, wicket kind).
//!
//! Structured records (`DeliveryInput`, `DeliveryOutcome`, `Innings`, ...)
//! live in `delivery.rs` and `state.rs`; this module only holds the leaf
//! vocabulary they are built from.

use std::fmt;

use uuid::Uuid;

use crate::error::DeliveryError;

// --- Player identity --------------------------------------------------------

/// Opaque identifier for a player (batter or bowler). Assigned by the roster
/// layer outside this crate; the kernel only ever compares and maps over it.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Mint a fresh random id. Handy for tests and fixtures; real callers
    /// carry ids issued by their roster store.
    pub fn random() -> Self {
        PlayerId(Uuid::new_v4())
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        PlayerId(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// --- Run counts -------------------------------------------------------------

/// A run count off a single delivery, constrained to the 0–6 domain.
///
/// Both runs off the bat and "additional" runs (overthrows, runs taken on a
/// wide) are bounded by six per delivery; anything outside that range is a
/// data-entry artefact, so `clamped` pulls stray values back into range and
/// `TryFrom<u8>` rejects them outright.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Runs(u8);

impl Runs {
    /// Largest run count a single delivery can yield.
    pub const MAX: u8 = 6;

    /// The zero run count (a dot, as far as this value is concerned).
    pub const ZERO: Runs = Runs(0);

    /// Clamp an arbitrary caller-supplied count into the 0–6 domain.
    /// Values at or below zero become 0; values above six become 6.
    pub fn clamped(n: i64) -> Runs {
        Runs(n.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Runs {
    type Error = DeliveryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX {
            Ok(Runs(value))
        } else {
            Err(DeliveryError::RunsOutOfRange(value))
        }
    }
}

impl From<Runs> for u8 {
    fn from(r: Runs) -> u8 {
        r.0
    }
}

impl fmt::Display for Runs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// --- Delivery classification -------------------------------------------------

/// How a delivery is classified for extras purposes. `None` is an ordinary
/// fair ball; everything else routes its runs through the extras column.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    #[default]
    None,
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// Whether a delivery of this kind counts toward the over. Wides and
    /// no-balls must be re-bowled and do not.
    pub fn is_legal(self) -> bool {
        !matches!(self, ExtraKind::Wide | ExtraKind::NoBall)
    }

    /// The automatic one-run penalty awarded for bowling this kind of ball.
    pub fn penalty(self) -> u32 {
        match self {
            ExtraKind::Wide | ExtraKind::NoBall => 1,
            ExtraKind::None | ExtraKind::Bye | ExtraKind::LegBye => 0,
        }
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExtraKind::None => "fair ball",
            ExtraKind::Wide => "wide",
            ExtraKind::NoBall => "no-ball",
            ExtraKind::Bye => "bye",
            ExtraKind::LegBye => "leg-bye",
        };
        f.write_str(label)
    }
}

/// Boundary flag on a delivery. `Four`/`Six` assert that the runs off the bat
/// were exactly four or six; the calculator rejects mismatches.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    #[default]
    None,
    Four,
    Six,
}

impl Boundary {
    /// The bat-run count this flag asserts, if any.
    pub fn asserted_runs(self) -> Option<u8> {
        match self {
            Boundary::None => None,
            Boundary::Four => Some(4),
            Boundary::Six => Some(6),
        }
    }
}

// --- Wicket kinds ------------------------------------------------------------

/// How a batter was dismissed. Kinds differ in which extras they can occur
/// alongside and in whether the bowler is credited with the wicket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WicketKind {
    Bowled,
    Caught,
    Lbw,
    Stumped,
    RunOut,
    HitWicket,
    ObstructingField,
}

impl WicketKind {
    /// Whether this dismissal goes into the bowler's wicket column.
    /// Run-outs and obstruction are fielding dismissals and do not.
    pub fn credits_bowler(self) -> bool {
        matches!(
            self,
            WicketKind::Bowled
                | WicketKind::Caught
                | WicketKind::Lbw
                | WicketKind::Stumped
                | WicketKind::HitWicket
        )
    }

    /// Whether this kind of dismissal can occur on a delivery of the given
    /// extra kind. A batter cannot be bowled, caught, or lbw off a wide, and
    /// off a no-ball only a run-out or obstruction can stand.
    pub fn valid_on(self, extra: ExtraKind) -> bool {
        match extra {
            ExtraKind::Wide => matches!(
                self,
                WicketKind::RunOut
                    | WicketKind::Stumped
                    | WicketKind::ObstructingField
                    | WicketKind::HitWicket
            ),
            ExtraKind::NoBall => {
                matches!(self, WicketKind::RunOut | WicketKind::ObstructingField)
            }
            ExtraKind::None | ExtraKind::Bye | ExtraKind::LegBye => true,
        }
    }
}

impl fmt::Display for WicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WicketKind::Bowled => "bowled",
            WicketKind::Caught => "caught",
            WicketKind::Lbw => "lbw",
            WicketKind::Stumped => "stumped",
            WicketKind::RunOut => "run out",
            WicketKind::HitWicket => "hit wicket",
            WicketKind::ObstructingField => "obstructing the field",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_clamped_into_domain() {
        assert_eq!(Runs::clamped(-3).get(), 0);
        assert_eq!(Runs::clamped(0).get(), 0);
        assert_eq!(Runs::clamped(4).get(), 4);
        assert_eq!(Runs::clamped(6).get(), 6);
        assert_eq!(Runs::clamped(42).get(), 6);
    }

    #[test]
    fn test_runs_try_from_rejects_out_of_range() {
        assert_eq!(Runs::try_from(6).unwrap().get(), 6);
        assert!(matches!(
            Runs::try_from(7),
            Err(DeliveryError::RunsOutOfRange(7))
        ));
    }

    #[test]
    fn test_extra_legality_and_penalty() {
        assert!(ExtraKind::None.is_legal());
        assert!(ExtraKind::Bye.is_legal());
        assert!(ExtraKind::LegBye.is_legal());
        assert!(!ExtraKind::Wide.is_legal());
        assert!(!ExtraKind::NoBall.is_legal());

        assert_eq!(ExtraKind::Wide.penalty(), 1);
        assert_eq!(ExtraKind::NoBall.penalty(), 1);
        assert_eq!(ExtraKind::None.penalty(), 0);
        assert_eq!(ExtraKind::Bye.penalty(), 0);
    }

    #[test]
    fn test_bowler_credit_kinds() {
        assert!(WicketKind::Bowled.credits_bowler());
        assert!(WicketKind::Caught.credits_bowler());
        assert!(WicketKind::Lbw.credits_bowler());
        assert!(WicketKind::Stumped.credits_bowler());
        assert!(WicketKind::HitWicket.credits_bowler());
        assert!(!WicketKind::RunOut.credits_bowler());
        assert!(!WicketKind::ObstructingField.credits_bowler());
    }

    #[test]
    fn test_wicket_validity_per_extra() {
        // Off a wide: only the non-bowling dismissals plus stumped/hit wicket.
        assert!(WicketKind::Stumped.valid_on(ExtraKind::Wide));
        assert!(WicketKind::RunOut.valid_on(ExtraKind::Wide));
        assert!(WicketKind::HitWicket.valid_on(ExtraKind::Wide));
        assert!(!WicketKind::Bowled.valid_on(ExtraKind::Wide));
        assert!(!WicketKind::Caught.valid_on(ExtraKind::Wide));
        assert!(!WicketKind::Lbw.valid_on(ExtraKind::Wide));

        // Off a no-ball the bat is live but the stumps are not.
        assert!(WicketKind::RunOut.valid_on(ExtraKind::NoBall));
        assert!(WicketKind::ObstructingField.valid_on(ExtraKind::NoBall));
        assert!(!WicketKind::Stumped.valid_on(ExtraKind::NoBall));
        assert!(!WicketKind::Caught.valid_on(ExtraKind::NoBall));

        // Fair balls and byes carry every kind.
        assert!(WicketKind::Bowled.valid_on(ExtraKind::None));
        assert!(WicketKind::Caught.valid_on(ExtraKind::Bye));
        assert!(WicketKind::Lbw.valid_on(ExtraKind::LegBye));
    }
}
