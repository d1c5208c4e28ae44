//! Property coverage for the history/undo manager: undo of an applied
//! delivery is an exact restore of the state it was applied to, for any valid
//! delivery sequence, wickets and replacements included.

use proptest::prelude::*;

use overline_core::{
    DeliveryInput, ExtraKind, MatchState, PlayerId, WicketInput, WicketKind,
};

/// One step of a randomly generated innings.
#[derive(Debug, Clone)]
struct Step {
    extra: ExtraKind,
    bat: u8,
    additional: u8,
    wicket: Option<WicketKind>,
}

fn arb_step() -> impl Strategy<Value = Step> {
    (
        prop_oneof![
            Just(ExtraKind::None),
            Just(ExtraKind::Wide),
            Just(ExtraKind::NoBall),
            Just(ExtraKind::Bye),
            Just(ExtraKind::LegBye),
        ],
        0u8..=6,
        0u8..=6,
        proptest::option::weighted(
            0.15,
            prop_oneof![
                Just(WicketKind::Bowled),
                Just(WicketKind::Caught),
                Just(WicketKind::Lbw),
                Just(WicketKind::Stumped),
                Just(WicketKind::RunOut),
                Just(WicketKind::HitWicket),
                Just(WicketKind::ObstructingField),
            ],
        ),
    )
        .prop_map(|(extra, bat, additional, wicket)| Step {
            extra,
            bat,
            additional,
            wicket,
        })
}

/// Build a precondition-respecting input for the step against the current
/// state.
fn step_input(state: &MatchState, step: &Step) -> DeliveryInput {
    let builder = DeliveryInput::builder(state).unwrap().extra(step.extra);
    let builder = match step.extra {
        ExtraKind::None => builder.bat_runs(step.bat as i64),
        ExtraKind::NoBall => builder
            .bat_runs(step.bat as i64)
            .additional_runs(step.additional as i64),
        ExtraKind::Wide | ExtraKind::Bye | ExtraKind::LegBye => {
            builder.additional_runs(step.additional as i64)
        }
    };
    match step.wicket {
        Some(kind) => builder
            .wicket(WicketInput {
                kind: Some(kind),
                ..Default::default()
            })
            .build(),
        None => builder.build(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// undo(apply(s, i)) == s, checked at every step of a random innings.
    #[test]
    fn prop_undo_is_exact_inverse_of_apply(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut state = MatchState::new(
            6,
            PlayerId::random(),
            PlayerId::random(),
            PlayerId::random(),
        )
        .unwrap();

        for step in steps {
            let input = step_input(&state, &step);
            let next = state.apply_delivery(&input).unwrap();

            prop_assert_eq!(next.undo(), state.clone());

            state = next;
            // A dismissal leaves a slot pending; admit the next batter the
            // way the scoring UI would before the following ball.
            if state.innings.striker.is_pending() || state.innings.non_striker.is_pending() {
                state.replace_batter(PlayerId::random()).unwrap();
            }
        }
    }

    /// Rewinding everything brings back the opening state, provided no
    /// out-of-band roster changes happened along the way.
    #[test]
    fn prop_full_rewind_restores_opening_state(
        steps in proptest::collection::vec(arb_step(), 0..40),
    ) {
        let initial = MatchState::new(
            6,
            PlayerId::random(),
            PlayerId::random(),
            PlayerId::random(),
        )
        .unwrap();

        let mut state = initial.clone();
        let mut applied = 0usize;
        for step in &steps {
            // Keep the crease fully occupied without mutating state between
            // deliveries: skip wickets in this sequence.
            let step = Step { wicket: None, ..step.clone() };
            let input = step_input(&state, &step);
            state = state.apply_delivery(&input).unwrap();
            applied += 1;
        }

        prop_assert_eq!(state.deliveries_applied(), applied);
        for _ in 0..applied {
            state = state.undo();
        }
        prop_assert_eq!(state, initial);
    }

    /// Undo past the start of the innings stays a no-op forever.
    #[test]
    fn prop_undo_on_empty_history_is_identity(extra_undos in 1usize..5) {
        let initial = MatchState::new(
            6,
            PlayerId::random(),
            PlayerId::random(),
            PlayerId::random(),
        )
        .unwrap();
        let mut state = initial.clone();
        for _ in 0..extra_undos {
            state = state.undo();
        }
        prop_assert_eq!(state, initial);
    }
}
