//! Keyframe build throughput on long replays.
//!
//! Run with: `cargo bench --bench keyframe_build_bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use slotmap::SlotMap;

use replay_animation::{
    ActorId, ActorRoots, BuildOptions, FrameDeltas, KeyframeSequence, NodeHandle, ReplayData,
    TelemetrySample, build_animations,
};

fn synthetic_track(frames: usize) -> Vec<TelemetrySample> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / 30.0;
            TelemetrySample::new(
                [t.sin() * 4000.0, t.cos() * 5000.0, 17.0 + t.sin().abs() * 300.0],
                [t * 0.1, -t * 0.2, t * 0.3],
            )
        })
        .collect()
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyframe_sequence");
    for frames in [1_000_usize, 10_000, 50_000] {
        let track = synthetic_track(frames);
        let deltas = FrameDeltas::from(vec![1.0 / 30.0; frames]);
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::from_parameter(frames), &frames, |b, _| {
            b.iter(|| KeyframeSequence::build(ActorId::Ball, black_box(&track), black_box(&deltas)));
        });
    }
    group.finish();
}

fn bench_full_build(c: &mut Criterion) {
    let frames = 50_000;
    let replay = ReplayData {
        names: (0..6).map(|i| format!("player-{i}")).collect(),
        players: (0..6).map(|_| synthetic_track(frames)).collect(),
        ball: synthetic_track(frames),
        frames: vec![vec![1.0 / 30.0]; frames],
    };
    let mut nodes: SlotMap<NodeHandle, ()> = SlotMap::with_key();
    let roots = ActorRoots {
        players: (0..6).map(|_| nodes.insert(())).collect(),
        ball: nodes.insert(()),
    };

    c.bench_function("build_animations_6v_50k", |b| {
        b.iter(|| build_animations(black_box(&replay), &roots, BuildOptions::default()));
    });
}

criterion_group!(benches, bench_sequence, bench_full_build);
criterion_main!(benches);
