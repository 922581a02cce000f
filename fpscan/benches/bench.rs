use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fpscan::{par, scan, StopMode};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_stop");
    group.bench_function("sequential", |b| {
        b.iter(|| scan(black_box(StopMode::FirstRoundBit)).last())
    });
    group.bench_function("parallel", |b| b.iter(par::find_stop));
    group.finish();

    let mut group = c.benchmark_group("flagged");
    for &mode in &[StopMode::FirstRoundBit, StopMode::Exhaustive] {
        let name = format!("{:?}", mode);
        group.bench_function(format!("sequential/{}", name), move |b| {
            b.iter(|| scan(black_box(mode)).count())
        });
        group.bench_function(format!("parallel/{}", name), move |b| {
            b.iter(|| par::flagged(black_box(mode)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
