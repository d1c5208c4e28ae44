#![no_main]

// Harness: undo_roundtrip - for every accepted delivery, undo must restore
// the exact pre-delivery state, however mangled the frame was.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use overline_core::{DeliveryInput, ExtraKind, MatchState, PlayerId, WicketInput, WicketKind};

#[derive(Arbitrary, Debug, Clone)]
struct Frame {
    extra_byte: u8,
    bat: i64,
    additional: i64,
    wicket_byte: Option<u8>,
}

fuzz_target!(|frames: Vec<Frame>| {
    let mut state = MatchState::new(
        6,
        PlayerId::random(),
        PlayerId::random(),
        PlayerId::random(),
    )
    .expect("nonzero over length");

    for frame in frames.iter().take(300) {
        let extra = match frame.extra_byte % 5 {
            0 => ExtraKind::None,
            1 => ExtraKind::Wide,
            2 => ExtraKind::NoBall,
            3 => ExtraKind::Bye,
            _ => ExtraKind::LegBye,
        };
        let mut builder = DeliveryInput::builder(&state)
            .expect("pending slots are refilled below")
            .extra(extra)
            .bat_runs(frame.bat)
            .additional_runs(frame.additional);
        if let Some(b) = frame.wicket_byte {
            builder = builder.wicket(WicketInput {
                kind: (b % 8 < 7).then(|| match b % 8 {
                    0 => WicketKind::Bowled,
                    1 => WicketKind::Caught,
                    2 => WicketKind::Lbw,
                    3 => WicketKind::Stumped,
                    4 => WicketKind::RunOut,
                    5 => WicketKind::HitWicket,
                    _ => WicketKind::ObstructingField,
                }),
                player_out: None,
                striker_out: None,
            });
        }

        if let Ok(next) = state.apply_delivery(&builder.build()) {
            assert_eq!(next.undo(), state);
            state = next;
            if state.innings.striker.is_pending() || state.innings.non_striker.is_pending() {
                state
                    .replace_batter(PlayerId::random())
                    .expect("a slot is pending");
            }
        }
    }
});
