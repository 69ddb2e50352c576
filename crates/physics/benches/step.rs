use criterion::{criterion_group, criterion_main, Criterion};
use fastrand::Rng;
use physics::{SimConfig, Simulation};

fn bench_full_step(c: &mut Criterion) {
    let config = SimConfig::new(100, 20.0, 1.0, 40.0).unwrap();
    let mut rng = Rng::with_seed(7);
    let mut sim = Simulation::new(config, &mut rng);
    c.bench_function("step_100_balls", |b| b.iter(|| sim.step(1.0 / 60.0)));
}

criterion_group!(benches, bench_full_step);
criterion_main!(benches);
