use scatter_core::{AxisField, ChartConfig, Dataset, ManualClock, Record, RenderOptions, ScatterChart};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use std::time::Duration;

fn build_dataset(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let f = i as f64;
            Record::new(format!("S{i}"), 8.0 + (f * 0.37).sin().abs() * 14.0, 30.0 + (f * 0.11).cos().abs() * 15.0, 20.0 + (f * 0.05).sin().abs() * 16.0)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[51usize, 1_000usize] {
        group.bench_function(format!("marks_{n}"), |b| {
            let clock = ManualClock::new();
            let mut chart = ScatterChart::new(build_dataset(n), ChartConfig::default(), clock.clone()).expect("chart");
            chart.select(AxisField::Age).expect("select");
            clock.advance(Duration::from_millis(500));
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = chart.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
