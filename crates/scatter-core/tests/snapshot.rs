// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic frames (initial and mid-switch) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::time::Duration;

use scatter_core::{AxisField, ChartConfig, Dataset, ManualClock, Record, RenderOptions, ScatterChart};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn chart(clock: &ManualClock) -> ScatterChart {
    let data = Dataset::new(vec![
        Record::new("A", 10.0, 30.0, 20.0),
        Record::new("B", 20.0, 50.0, 40.0),
        Record::new("C", 14.5, 41.0, 31.5),
    ]);
    ScatterChart::new(data, ChartConfig::default(), clock.clone()).expect("chart")
}

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts
}

#[test]
fn golden_initial_chart() {
    let clock = ManualClock::new();
    let bytes = chart(&clock).render_to_png_bytes(&opts()).expect("render bytes");
    write_or_compare("initial.png", &bytes);
}

#[test]
fn golden_mid_switch() {
    let clock = ManualClock::new();
    let mut c = chart(&clock);
    c.select(AxisField::Age).expect("select");
    clock.advance(Duration::from_millis(500));
    let bytes = c.render_to_png_bytes(&opts()).expect("render bytes");
    write_or_compare("mid_switch.png", &bytes);
}
