// File: crates/scatter-demo/src/main.rs
// Summary: Demo loads the health CSV, plays a poverty -> age -> poverty click sequence and writes PNG frames.

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{theme, AxisField, ChartConfig, Easing, ManualClock, RenderOptions, ScatterChart};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scatter-demo")]
#[command(about = "Render poverty/age vs obesity scatter frames to PNG", long_about = None)]
struct Args {
    /// CSV with state, poverty, age and obesity columns
    #[arg(default_value = "data/data.csv")]
    input: PathBuf,

    /// Directory the PNG frames are written to
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Easing curve (linear, quad, cubic, sin)
    #[arg(long, default_value = "cubic")]
    easing: String,

    /// Transition length in milliseconds
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Also write this many evenly spaced frames of the first switch
    #[arg(long)]
    frames: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut config = ChartConfig::default();
    config.transition.duration = Duration::from_millis(args.duration_ms);
    config.transition.easing = Easing::from_name(&args.easing)
        .with_context(|| format!("unknown easing '{}'", args.easing))?;
    let duration = config.transition.duration;

    let clock = ManualClock::new();
    let mut chart = ScatterChart::load(&args.input, config, clock.clone())
        .with_context(|| format!("failed to build chart from '{}'", args.input.display()))?;
    tracing::info!(input = %args.input.display(), records = chart.controller().dataset().len(), "chart ready");

    let opts = RenderOptions { theme: theme::find(&args.theme), draw_labels: true };
    let out = |name: &str| frame_path(&args.out_dir, name);

    chart.render_to_png(&opts, out("initial"))?;

    // 1) Switch to age and capture the animation
    chart.select(AxisField::Age)?;
    match args.frames {
        Some(n) if n > 1 => {
            for i in 0..n {
                clock.set(duration.mul_f64(i as f64 / (n - 1) as f64));
                chart.render_to_png(&opts, out(&format!("to_age_{i:03}")))?;
            }
        }
        _ => {
            clock.advance(duration / 2);
            chart.render_to_png(&opts, out("to_age_mid"))?;
            clock.advance(duration / 2);
        }
    }
    chart.render_to_png(&opts, out("age"))?;

    // 2) Click back to poverty, then change our mind halfway through
    chart.select(AxisField::Poverty)?;
    clock.advance(duration / 4);
    chart.render_to_png(&opts, out("to_poverty_quarter"))?;
    chart.select(AxisField::Age)?;
    clock.advance(duration / 4);
    chart.render_to_png(&opts, out("superseded"))?;
    clock.advance(duration);

    // 3) Settle on poverty and hover the first state
    chart.select(AxisField::Poverty)?;
    clock.advance(duration);
    if let Some(key) = chart.controller().marks().key(0).map(str::to_owned) {
        if let Some((x, y)) = chart.scene().position(&key) {
            let plot = chart.plot_rect();
            if let Some(tip) = chart.hover(plot.left + x, plot.top + y) {
                tracing::info!(mark = %key, tooltip = %tip.replace('\n', " | "), "hovering");
            }
        }
    }
    chart.render_to_png(&opts, out("poverty_tooltip"))?;

    tracing::info!(dir = %args.out_dir.display(), "frames written");
    Ok(())
}

/// Output path like target/out/scatter_<name>.png
fn frame_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("scatter_{name}.png"))
}
