use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempo::prelude::*;

fn sample_instants() -> Vec<chrono::DateTime<chrono::Utc>> {
    vec![
        tempo::datetime(2023, 2, 15, 10, 20, 30),
        tempo::date(2020, 2, 29),
        tempo::datetime(2023, 12, 31, 23, 59, 59),
    ]
}

fn bench_shift(c: &mut Criterion) {
    let instants = sample_instants();
    c.bench_function("add one month", |b| {
        b.iter(|| {
            for t in &instants {
                black_box(*t + 1.month());
            }
        })
    });
}

fn bench_boundaries(c: &mut Criterion) {
    let instants = sample_instants();
    c.bench_function("beginning and end of month", |b| {
        b.iter(|| {
            for t in &instants {
                black_box(t.beginning_of_month());
                black_box(t.end_of_month());
            }
        })
    });
}

fn bench_format_bridge(c: &mut Criterion) {
    let t = tempo::datetime(2023, 2, 15, 10, 20, 30);
    let pattern = "%Y-%m-%d %H:%M:%S";
    let rendered = t.format_as(pattern);
    c.bench_function("format and parse", |b| {
        b.iter(|| {
            let s = t.format_as(black_box(pattern));
            black_box(tempo::parse_from_pattern(&s, pattern).unwrap());
            black_box(tempo::parse_from_pattern(&rendered, pattern).unwrap());
        })
    });
}

criterion_group!(benches, bench_shift, bench_boundaries, bench_format_bridge);
criterion_main!(benches);
