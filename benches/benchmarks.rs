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
        solving_kuhn_vanilla,
        solving_kuhn_chance,
        solving_kuhn_plus,
        measuring_kuhn_exploitability,
        measuring_large_deck_exploitability,
        checkpointing_kuhn_session,
}

fn solving_kuhn_vanilla(c: &mut criterion::Criterion) {
    c.bench_function("advance vanilla CFR 100 iterations on Kuhn", |b| {
        let mut solver = Minimizer::new(Rules::default(), Settings::default());
        b.iter(|| solver.advance(100))
    });
}

fn solving_kuhn_chance(c: &mut criterion::Criterion) {
    c.bench_function("advance chance sampling CFR 1000 iterations on Kuhn", |b| {
        let settings = Settings {
            sampling: Sampling::Chance,
            ..Settings::default()
        };
        let mut solver = Minimizer::new(Rules::default(), settings);
        b.iter(|| solver.advance(1000))
    });
}

fn solving_kuhn_plus(c: &mut criterion::Criterion) {
    c.bench_function("advance CFR+ 100 iterations on Kuhn", |b| {
        let settings = Settings {
            regret: RegretSchedule::Floored,
            weight: PolicySchedule::Linear,
            ..Settings::default()
        };
        let mut solver = Minimizer::new(Rules::default(), settings);
        b.iter(|| solver.advance(100))
    });
}

fn measuring_kuhn_exploitability(c: &mut criterion::Criterion) {
    let mut solver = Minimizer::new(Rules::default(), Settings::default());
    let _ = solver.advance(1000);
    let profile = solver.profile();
    c.bench_function("compute Kuhn best response", |b| {
        b.iter(|| profile.best_response())
    });
}

fn measuring_large_deck_exploitability(c: &mut criterion::Criterion) {
    let Ok(rules) = Rules::new(13, 1., 1.) else {
        return;
    };
    let mut solver = Minimizer::new(rules, Settings::default());
    let _ = solver.advance(100);
    let profile = solver.profile();
    c.bench_function("compute 13-card Kuhn best response", |b| {
        b.iter(|| profile.best_response())
    });
}

fn checkpointing_kuhn_session(c: &mut criterion::Criterion) {
    let Ok(schedule) = Schedule::new(1000, 100) else {
        return;
    };
    c.bench_function("benchmark vanilla CFR with 10 checkpoints", |b| {
        b.iter(|| {
            let mut bench = Benchmark::new(Rules::default(), "Kuhn Poker");
            bench.run_algorithm(Minimizer::vanilla, "Vanilla CFR", schedule, &Options::default())
                .map(|run| run.checkpoints().len())
        })
    });
}

use cfrbench::bench::*;
use cfrbench::kuhn::*;
use cfrbench::solver::*;
