//!
//! The ball-result calculator: turns one delivery's raw facts plus the current
//! innings into a [`DeliveryOutcome`], without mutating anything.
//!
//! Validation runs first and rejects internally-contradictory input; unusual
//! but legal cricket (a mis-clicked wicket kind on a wide, say) is corrected
//! with a warning instead, because it must not block live scoring.

use crate::delivery::{DeliveryInput, DeliveryOutcome, Dismissal, WicketInput};
use crate::error::DeliveryError;
use crate::state::{BatterSlot, Extras, Innings};
use crate::types::{ExtraKind, WicketKind};

/// Compute the delta one delivery produces against the given innings.
///
/// Pure: no mutation, no side effects beyond advisory `tracing` output.
/// Errors only on input that contradicts itself (bat runs on a wide, a
/// boundary flag that disagrees with the bat-run count); see
/// [`DeliveryError`] for the full list.
pub fn compute_outcome(
    input: &DeliveryInput,
    innings: &Innings,
) -> Result<DeliveryOutcome, DeliveryError> {
    validate(input, innings)?;

    let bat = input.bat_runs.get() as u32;
    let additional = input.additional_runs.get() as u32;
    let penalty = input.extra.penalty();
    let legal = input.extra.is_legal();

    // Scoring table per extra kind. Rotation runs are the runs physically run
    // between the wickets (plus bat runs), which is what decides the strike
    // swap; the penalty run is awarded, not run.
    let (team_runs, rotation_runs, bowler_runs) = match input.extra {
        ExtraKind::None => (bat, bat, bat),
        ExtraKind::Wide => (penalty + additional, additional, penalty + additional),
        ExtraKind::NoBall => (
            penalty + bat + additional,
            bat + additional,
            penalty + bat + additional,
        ),
        ExtraKind::Bye | ExtraKind::LegBye => (additional, additional, 0),
    };

    // Extras bookkeeping: the wide column takes the whole wide total; the
    // no-ball column takes the penalty plus any runs not off the bat (bat
    // runs stay the batter's); byes and leg-byes take the runs taken.
    let extras = match input.extra {
        ExtraKind::None => Extras::default(),
        ExtraKind::Wide => Extras {
            wides: team_runs,
            ..Extras::default()
        },
        ExtraKind::NoBall => Extras {
            no_balls: penalty + additional,
            ..Extras::default()
        },
        ExtraKind::Bye => Extras {
            byes: additional,
            ..Extras::default()
        },
        ExtraKind::LegBye => Extras {
            leg_byes: additional,
            ..Extras::default()
        },
    };

    let mut warnings = Vec::new();
    let mut striker = BatterSlot::Occupied(input.striker);
    let mut non_striker = BatterSlot::Occupied(input.non_striker);

    // An odd number of runs run leaves the batters crossed. This holds for
    // every extra kind, wides included.
    if rotation_runs % 2 == 1 {
        std::mem::swap(&mut striker, &mut non_striker);
    }

    let dismissal = input
        .wicket
        .as_ref()
        .map(|wicket| normalize_wicket(wicket, input, &mut warnings));

    // The dismissed batter's slot (wherever the rotation left them) goes
    // pending until the caller admits the replacement.
    if let Some(out) = &dismissal {
        if striker.holds(out.player_out) {
            striker = BatterSlot::AwaitingReplacement;
        } else if non_striker.holds(out.player_out) {
            non_striker = BatterSlot::AwaitingReplacement;
        }
    }

    let legal_balls_after = innings.legal_balls + u32::from(legal);
    let over_completed = legal && legal_balls_after % innings.balls_per_over == 0;

    // End-of-over change of ends composes with, not replaces, the earlier
    // rotation and dismissal handling.
    if over_completed {
        std::mem::swap(&mut striker, &mut non_striker);
    }

    Ok(DeliveryOutcome {
        legal,
        team_runs,
        // Validation already pinned bat to zero on wides, byes, and leg-byes.
        batter_runs: bat,
        extras,
        bowler_runs,
        dismissal,
        striker_after: striker,
        non_striker_after: non_striker,
        over_completed,
        warnings,
    })
}

/// Reject deliveries whose fields contradict each other or whose recorded
/// position disagrees with the innings they are applied to.
fn validate(input: &DeliveryInput, innings: &Innings) -> Result<(), DeliveryError> {
    // Guards the division below for innings built outside `MatchState::new`
    // (hand-assembled or deserialized snapshots).
    if innings.balls_per_over == 0 {
        return Err(DeliveryError::BallsPerOverZero);
    }

    // The positional fields pin a delivery to the ball it was entered for.
    // A mismatch means the input was built from a snapshot that has since
    // moved on; applying it anyway would score the ball out of sequence.
    let expected_over = innings.legal_balls / innings.balls_per_over;
    let expected_ball = innings.legal_balls % innings.balls_per_over;
    if input.over != expected_over || input.ball_in_over != expected_ball {
        return Err(DeliveryError::DeliveryOutOfSequence {
            over: input.over,
            ball_in_over: input.ball_in_over,
            expected_over,
            expected_ball,
        });
    }

    let bat = input.bat_runs.get();
    let additional = input.additional_runs.get();

    match input.extra {
        ExtraKind::Wide if bat > 0 => return Err(DeliveryError::BatRunsOnWide),
        ExtraKind::Bye | ExtraKind::LegBye if bat > 0 => {
            return Err(DeliveryError::BatRunsOnBye)
        }
        ExtraKind::None if additional > 0 => {
            return Err(DeliveryError::AdditionalRunsOnFairBall)
        }
        _ => {}
    }

    if let Some(expected) = input.boundary.asserted_runs() {
        if bat != expected {
            return Err(DeliveryError::BoundaryMismatch {
                boundary: input.boundary,
                expected,
                got: bat,
            });
        }
    }

    Ok(())
}

/// Resolve the caller's wicket descriptor into a definite dismissal.
///
/// A kind invalid for the extra (caught off a wide, stumped off a no-ball) is
/// an honest scorer mis-click: it is rewritten to a run-out and flagged with a
/// warning rather than rejected. A missing kind is run-out shorthand and is
/// normalized silently.
fn normalize_wicket(
    wicket: &WicketInput,
    input: &DeliveryInput,
    warnings: &mut Vec<String>,
) -> Dismissal {
    let kind = match wicket.kind {
        Some(kind) if kind.valid_on(input.extra) => kind,
        Some(kind) => {
            let message = format!(
                "{} cannot be taken off a {}; recorded as run out",
                kind, input.extra
            );
            tracing::warn!(
                wicket_kind = %kind,
                extra = %input.extra,
                "auto-corrected wicket kind to run out"
            );
            warnings.push(message);
            WicketKind::RunOut
        }
        None => WicketKind::RunOut,
    };

    let player_out = wicket.player_out.unwrap_or_else(|| match wicket.striker_out {
        Some(false) => input.non_striker,
        // Ambiguous run-out reports default to the striker. Some scoring
        // conventions would pick the non-striker here; revisit if product
        // decides otherwise.
        _ => input.striker,
    });

    Dismissal {
        kind,
        player_out,
        credits_bowler: kind.credits_bowler(),
    }
}
