use criterion::{criterion_group, criterion_main, Criterion, SamplingMode, Throughput};
use lib::ai::{Ai, Greedy};
use lib::chess::{Board, Color, Game};
use std::hint::black_box;

fn games() -> Vec<(&'static str, Game)> {
    let kiwipete: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"
        .parse()
        .unwrap_or_default();

    vec![
        ("standard", Game::standard()),
        ("kiwipete", Game::new(kiwipete, Color::White)),
    ]
}

fn bench(c: &mut Criterion) {
    for (name, g) in games() {
        c.benchmark_group("current_moves")
            .throughput(Throughput::Elements(g.current_moves().len() as u64))
            .bench_function(name, |b| b.iter(|| black_box(&g).current_moves()));
    }

    for (name, g) in games() {
        c.benchmark_group("greedy")
            .bench_function(name, |b| b.iter(|| Greedy::new().next_move(black_box(&g))));
    }

    for (name, g) in games() {
        let depth = 3;
        c.benchmark_group("perft")
            .sampling_mode(SamplingMode::Flat)
            .sample_size(10)
            .throughput(Throughput::Elements(g.perft(depth) as u64))
            .bench_function(name, |b| b.iter(|| black_box(&g).perft(depth)));
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
