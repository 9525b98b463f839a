// File: crates/scatter-window/src/main.rs
// Summary: Interactive window demo; click axis labels to switch fields, hover marks for tooltips (winit + softbuffer RGBA blit).

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use scatter_core::{theme, ChartConfig, RenderOptions, ScatterChart, SystemClock};
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{CursorIcon, WindowBuilder};

#[derive(Parser, Debug)]
#[command(name = "scatter-window")]
#[command(about = "Interactive poverty/age vs obesity scatter plot", long_about = None)]
struct Args {
    /// CSV with state, poverty, age and obesity columns
    #[arg(default_value = "data/data.csv")]
    input: PathBuf,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let config = ChartConfig::default();
    let (width, height) = (config.width as u32, config.height as u32);
    let mut chart = ScatterChart::load(&args.input, config, SystemClock::new())
        .with_context(|| format!("failed to build chart from '{}'", args.input.display()))?;
    let opts = RenderOptions { theme: theme::find(&args.theme), draw_labels: true };

    // The chart is laid out in pixels, so the window is sized in physical pixels too
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Health Scatter")
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let mut cursor: Option<(f64, f64)> = None;
    let mut dirty = true;

    event_loop.run(move |event, _, cf| {
        let _keep_alive = &context;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    chart.detach();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    let before = chart.scene().hovered().map(str::to_owned);
                    chart.hover(position.x, position.y);
                    if chart.scene().hovered() != before.as_deref() {
                        dirty = true;
                    }
                    let icon = if chart.label_at(position.x, position.y).is_some() { CursorIcon::Hand } else { CursorIcon::Default };
                    window.set_cursor_icon(icon);
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    chart.clear_hover();
                    dirty = true;
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        match chart.click(x, y) {
                            Ok(changed) => dirty |= changed,
                            Err(e) => {
                                tracing::error!("axis switch failed: {e}");
                                *cf = ControlFlow::Exit;
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if dirty || chart.scene().is_animating() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&chart, &opts, &mut surface) {
                    tracing::error!("draw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                    return;
                }
                dirty = false;
            }
            _ => {}
        }
        if *cf != ControlFlow::Exit {
            // keep frames coming while marks are moving
            *cf = if chart.scene().is_animating() { ControlFlow::Poll } else { ControlFlow::Wait };
        }
    });
}

fn draw(chart: &ScatterChart, opts: &RenderOptions, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = chart.render_to_rgba8(opts)?;
    let (nw, nh) = (
        NonZeroU32::new(w).context("zero width")?,
        NonZeroU32::new(h).context("zero height")?,
    );
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e:?}"))?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e:?}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}
