criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        dealing_heads_up_round,
        dealing_full_ring_round,
        tallying_rounds,
        rendering_heat_map,
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    let hole = Hole::try_from("AsKd").unwrap();
    let board = Card::parse("Qh Jc Ts 4d 2s").unwrap();
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| Strength::evaluate(&hole, &board))
    });
}

fn dealing_heads_up_round(c: &mut criterion::Criterion) {
    let mut simulator = Simulator::default();
    c.bench_function("deal and score a heads-up Round", |b| {
        b.iter(|| simulator.step(false))
    });
}

fn dealing_full_ring_round(c: &mut criterion::Criterion) {
    let mut simulator = Simulator::new(SEED, SUITS, RANKS, 9).unwrap();
    c.bench_function("deal and score a 9-handed Round", |b| {
        b.iter(|| simulator.step(false))
    });
}

fn tallying_rounds(c: &mut criterion::Criterion) {
    let rounds = Simulator::default().run(1024, false).unwrap();
    let alphabet = Alphabet::default();
    c.bench_function("tally 1024 Rounds", |b| {
        b.iter(|| Tally::from_rounds(&alphabet, &rounds))
    });
}

fn rendering_heat_map(c: &mut criterion::Criterion) {
    let matrix = vec![vec![0.5; 13]; 13];
    let options = PlotOptions::default();
    c.bench_function("render a 13x13 heat map", |b| {
        b.iter(|| plot(&matrix, &options))
    });
}

use handmap::cards::*;
use handmap::plotting::*;
use handmap::simulation::*;
use handmap::tally::*;
use handmap::*;
