use scatter_core::{compute_scale, AxisField, ChartConfig, Dataset, ManualClock, Record, ScatterChart};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_dataset(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let f = i as f64;
            Record::new(format!("S{i}"), 5.0 + (f * 0.013).sin().abs() * 20.0, 28.0 + (f * 0.007).cos().abs() * 20.0, 30.0)
        })
        .collect()
}

fn bench_compute_scale(c: &mut Criterion) {
    let data = build_dataset(100_000);
    c.bench_function("compute_scale_100k", |b| {
        b.iter(|| black_box(compute_scale(&data, AxisField::Age, 0.0, 900.0).expect("scale")));
    });
}

fn bench_select(c: &mut Criterion) {
    let clock = ManualClock::new();
    let mut chart = ScatterChart::new(build_dataset(1_000), ChartConfig::default(), clock).expect("chart");
    let mut field = AxisField::Poverty;
    c.bench_function("select_toggle_1k", |b| {
        b.iter(|| {
            field = field.other();
            black_box(chart.select(field).expect("select"));
        });
    });
}

criterion_group!(benches, bench_compute_scale, bench_select);
criterion_main!(benches);
