use criterion::{criterion_group, criterion_main, Criterion};
use overline_core::{DeliveryInput, ExtraKind, MatchState, PlayerId};

fn delivery_benchmarks(c: &mut Criterion) {
    let state = MatchState::new(
        6,
        PlayerId::random(),
        PlayerId::random(),
        PlayerId::random(),
    )
    .unwrap();

    c.bench_function("apply_single", |b| {
        let single = DeliveryInput::builder(&state).unwrap().bat_runs(1).build();
        b.iter(|| {
            let _next = state.apply_delivery(&single).unwrap();
        })
    });

    c.bench_function("apply_full_over", |b| {
        b.iter(|| {
            let mut s = state.clone();
            for _ in 0..6 {
                let ball = DeliveryInput::builder(&s).unwrap().bat_runs(1).build();
                s = s.apply_delivery(&ball).unwrap();
            }
            s
        })
    });

    c.bench_function("undo_after_wide", |b| {
        let wide = DeliveryInput::builder(&state)
            .unwrap()
            .extra(ExtraKind::Wide)
            .additional_runs(2)
            .build();
        let applied = state.apply_delivery(&wide).unwrap();
        b.iter(|| applied.undo())
    });
}

criterion_group!(benches, delivery_benchmarks);
criterion_main!(benches);
