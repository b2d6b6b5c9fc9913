use criterion::{black_box, criterion_group, criterion_main, Criterion};
use estimator_core::{LinearStateEstimator, MeasVec};

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");

    for every in [1usize, 10, 50] {
        group.bench_function(format!("predict_correct_every_{every}"), |b| {
            b.iter(|| {
                let mut est = LinearStateEstimator::new(200.0).expect("valid config");
                // One second of ticks tracking a straight-line target
                for i in 0..200usize {
                    est.predict();
                    if i % every == 0 {
                        let t = i as f64 * est.dt();
                        let z = MeasVec::new(40.0 * t, -15.0 * t);
                        est.correct(&z).expect("well-conditioned innovation");
                    }
                }
                black_box(est.state());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);
