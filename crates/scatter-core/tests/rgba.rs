// File: crates/scatter-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use scatter_core::{ChartConfig, Dataset, ManualClock, Record, RenderOptions, ScatterChart, Theme};

#[test]
fn render_rgba8_buffer() {
    let data = Dataset::new(vec![
        Record::new("A", 10.0, 30.0, 20.0),
        Record::new("B", 20.0, 50.0, 40.0),
    ]);
    let chart = ScatterChart::new(data, ChartConfig::default(), ManualClock::new()).expect("chart");

    let opts = RenderOptions { theme: Theme::light(), draw_labels: false }; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Center of mark A: plot origin (50, 50) + (150, 175)
    let (x, y) = (200usize, 225usize);
    let p = &px[y * stride + x * 4..y * stride + x * 4 + 4];
    assert_ne!(&p[0..3], &[255, 255, 255], "mark should cover its center");
}
