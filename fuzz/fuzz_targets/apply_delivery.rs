#![no_main]

// Harness: apply_delivery - drives arbitrary delivery frames through the
// reducer and checks the accounting identities that must hold after every
// accepted ball. Rejected frames (precondition violations) are expected for
// random input and simply skipped.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use overline_core::{
    Boundary, DeliveryInput, ExtraKind, MatchState, PlayerId, WicketInput, WicketKind,
};

#[derive(Arbitrary, Debug, Clone)]
struct DeliveryFrame {
    extra_byte: u8,
    bat: i64,
    additional: i64,
    boundary_byte: u8,
    wicket_byte: Option<u8>,
    striker_out: Option<bool>,
}

fn extra_from_byte(b: u8) -> ExtraKind {
    match b % 5 {
        0 => ExtraKind::None,
        1 => ExtraKind::Wide,
        2 => ExtraKind::NoBall,
        3 => ExtraKind::Bye,
        _ => ExtraKind::LegBye,
    }
}

fn boundary_from_byte(b: u8) -> Boundary {
    match b % 3 {
        0 => Boundary::None,
        1 => Boundary::Four,
        _ => Boundary::Six,
    }
}

fn wicket_from_byte(b: u8) -> WicketKind {
    match b % 7 {
        0 => WicketKind::Bowled,
        1 => WicketKind::Caught,
        2 => WicketKind::Lbw,
        3 => WicketKind::Stumped,
        4 => WicketKind::RunOut,
        5 => WicketKind::HitWicket,
        _ => WicketKind::ObstructingField,
    }
}

fuzz_target!(|frames: Vec<DeliveryFrame>| {
    let mut state = MatchState::new(
        6,
        PlayerId::random(),
        PlayerId::random(),
        PlayerId::random(),
    )
    .expect("nonzero over length");

    for frame in frames.iter().take(300) {
        let mut builder = match DeliveryInput::builder(&state) {
            Ok(b) => b,
            Err(_) => unreachable!("pending slots are refilled below"),
        };
        builder = builder
            .extra(extra_from_byte(frame.extra_byte))
            .bat_runs(frame.bat)
            .additional_runs(frame.additional)
            .boundary(boundary_from_byte(frame.boundary_byte));
        if let Some(b) = frame.wicket_byte {
            builder = builder.wicket(WicketInput {
                kind: Some(wicket_from_byte(b)),
                player_out: None,
                striker_out: frame.striker_out,
            });
        }

        let next = match state.apply_delivery(&builder.build()) {
            Ok(next) => next,
            // Contradictory frames are rejected without touching state.
            Err(_) => continue,
        };

        // Accounting identities over the running innings.
        let innings = &next.innings;
        let batter_runs: u32 = innings.batters.values().map(|c| c.runs).sum();
        assert_eq!(innings.total_runs, batter_runs + innings.extras.total());

        let bowler_balls: u32 = innings.bowlers.values().map(|c| c.balls).sum();
        assert_eq!(innings.legal_balls, bowler_balls);

        let out_count = innings.batters.values().filter(|c| c.out).count() as u32;
        assert_eq!(innings.wickets, out_count);

        assert_eq!(next.deliveries_applied(), state.deliveries_applied() + 1);

        state = next;
        if state.innings.striker.is_pending() || state.innings.non_striker.is_pending() {
            state
                .replace_batter(PlayerId::random())
                .expect("a slot is pending");
        }
    }
});
