// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG, plus label click handling.

use std::time::Duration;

use scatter_core::{AxisField, ChartConfig, ChartError, Dataset, ManualClock, Record, RenderOptions, ScatterChart};

fn sample() -> Dataset {
    Dataset::new(vec![
        Record::new("Alabama", 19.3, 38.6, 33.5).with_abbr("AL"),
        Record::new("Alaska", 11.2, 35.2, 29.7).with_abbr("AK"),
        Record::new("Arizona", 18.2, 36.9, 28.9).with_abbr("AZ"),
        Record::new("Utah", 11.7, 30.5, 25.2).with_abbr("UT"),
    ])
}

#[test]
fn render_smoke_png() {
    let clock = ManualClock::new();
    let chart = ScatterChart::new(sample(), ChartConfig::default(), clock).expect("chart");

    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 500));
}

#[test]
fn render_mid_transition_with_tooltip() {
    let clock = ManualClock::new();
    let mut chart = ScatterChart::new(sample(), ChartConfig::default(), clock.clone()).expect("chart");
    chart.select(AxisField::Age).unwrap();
    clock.advance(Duration::from_millis(500));
    let (x, y) = chart.scene().position("Utah").unwrap();
    let plot = chart.plot_rect();
    assert!(chart.hover(plot.left + x, plot.top + y).is_some());

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn clicking_labels_switches_axis() {
    let clock = ManualClock::new();
    let mut chart = ScatterChart::new(sample(), ChartConfig::default(), clock).expect("chart");

    let age = chart.label_rect(AxisField::Age);
    assert_eq!(chart.label_at(age.center_x(), age.bottom - 2.0), Some(AxisField::Age));
    assert!(chart.click(age.center_x(), age.bottom - 2.0).unwrap());
    assert_eq!(chart.field(), AxisField::Age);

    // clicking the active label again does nothing
    assert!(!chart.click(age.center_x(), age.bottom - 2.0).unwrap());

    let poverty = chart.label_rect(AxisField::Poverty);
    assert!(poverty.bottom <= age.top + 4.0 + 1e-9);
    assert!(chart.click(poverty.center_x(), poverty.top + 2.0).unwrap());
    assert_eq!(chart.field(), AxisField::Poverty);

    // empty space
    assert!(!chart.click(5.0, 5.0).unwrap());
}

#[test]
fn plot_area_matches_default_margins() {
    let chart = ScatterChart::new(sample(), ChartConfig::default(), ManualClock::new()).expect("chart");
    let plot = chart.plot_rect();
    assert_eq!((plot.left, plot.top), (50.0, 50.0));
    assert_eq!((plot.width(), plot.height()), (900.0, 350.0));
}

#[test]
fn detached_chart_cannot_render() {
    let mut chart = ScatterChart::new(sample(), ChartConfig::default(), ManualClock::new()).expect("chart");
    chart.detach();
    assert!(matches!(
        chart.render_to_png_bytes(&RenderOptions::default()),
        Err(ChartError::RenderTargetUnavailable)
    ));
    assert!(matches!(chart.select(AxisField::Age), Err(ChartError::RenderTargetUnavailable)));
}
