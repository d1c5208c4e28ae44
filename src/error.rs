//!
//! Error types for the scoring kernel.

use crate::types::Boundary;

/// Errors raised for internally-contradictory delivery input.
///
/// These are programmer/UI-layer mistakes, never legal-but-unusual cricket:
/// the calculator runs before any state is touched, so a rejected delivery
/// leaves the match state exactly as it was. Unusual but legal situations
/// (e.g. a stumping attempt recorded as "caught" on a wide) are auto-corrected
/// with a warning instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// A wide never comes off the bat; any runs taken belong in the
    /// additional-runs column.
    #[error("runs off the bat cannot be scored on a wide")]
    BatRunsOnWide,
    /// Byes and leg-byes are by definition not struck; runs taken belong in
    /// the additional-runs column.
    #[error("runs off the bat cannot be scored on a bye or leg-bye")]
    BatRunsOnBye,
    /// On an ordinary fair ball every run is a bat run; the additional-runs
    /// column is reserved for extras.
    #[error("additional runs cannot be scored on a fair delivery")]
    AdditionalRunsOnFairBall,
    /// A boundary flag asserts the exact bat-run count (four or six).
    #[error("boundary {boundary:?} requires exactly {expected} runs off the bat, got {got}")]
    BoundaryMismatch {
        boundary: Boundary,
        expected: u8,
        got: u8,
    },
    /// A run count outside the 0–6 per-delivery domain.
    #[error("run count {0} is outside the 0-6 range")]
    RunsOutOfRange(u8),
    /// An over must contain at least one legal ball; a zero over length
    /// would make over arithmetic meaningless.
    #[error("balls per over must be at least one")]
    BallsPerOverZero,
    /// The delivery's recorded position disagrees with the innings it is
    /// being applied to. The usual cause is an input built from a stale
    /// snapshot; rebuild it from the current state.
    #[error(
        "delivery positioned at {over}.{ball_in_over} but the innings is at \
         {expected_over}.{expected_ball}"
    )]
    DeliveryOutOfSequence {
        over: u32,
        ball_in_over: u32,
        expected_over: u32,
        expected_ball: u32,
    },
    /// A delivery cannot be built while a batter slot is awaiting its
    /// replacement; admit the new batter first.
    #[error("a batter slot is awaiting a replacement")]
    BatterReplacementPending,
    /// `replace_batter` was called with both crease slots occupied.
    #[error("no batter slot is awaiting a replacement")]
    NoPendingBatter,
}
