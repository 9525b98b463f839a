// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart wiring (scene + controller) and the headless Skia rendering pipeline.

use std::path::Path;
use std::sync::Arc;

use skia_safe as skia;

use crate::axis::{LabelState, Y_AXIS_TITLE};
use crate::controller::AxisController;
use crate::data::{AxisField, Dataset};
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::loader::load_csv_path;
use crate::scene::{Frame, Scene};
use crate::text::{draw_centered, draw_right, measure_width, Fonts};
use crate::theme::Theme;
use crate::transition::Clock;
use crate::types::ChartConfig;

/// Font size of the two clickable axis labels.
const LABEL_SIZE: f64 = 16.0;
const TICK_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 6.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Text for ticks, labels, abbreviations and tooltips. Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true }
    }
}

/// The interactive scatter plot: a retained scene plus the controller that owns the x axis.
pub struct ScatterChart {
    config: ChartConfig,
    scene: Scene,
    controller: AxisController,
}

impl ScatterChart {
    /// Build the chart and perform the initial draw.
    pub fn new(dataset: impl Into<Arc<Dataset>>, config: ChartConfig, clock: impl Clock + 'static) -> Result<Self> {
        let mut scene = Scene::new(clock).with_tick_count(config.tick_count);
        let controller = AxisController::initialize(&mut scene, dataset.into(), &config)?;
        Ok(Self { config, scene, controller })
    }

    /// Load the CSV at `path` with `config.columns` and build the chart.
    pub fn load(path: impl AsRef<Path>, config: ChartConfig, clock: impl Clock + 'static) -> Result<Self> {
        let dataset = load_csv_path(path, &config.columns)?;
        Self::new(dataset, config, clock)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &AxisController {
        &self.controller
    }

    pub fn field(&self) -> AxisField {
        self.controller.field()
    }

    pub fn select(&mut self, field: AxisField) -> Result<bool> {
        self.controller.select(&mut self.scene, field)
    }

    /// Drop the render target; later selections fail with `RenderTargetUnavailable`.
    pub fn detach(&mut self) {
        self.scene.detach();
    }

    /// Plotting area in surface pixels.
    pub fn plot_rect(&self) -> RectF {
        let i = self.config.insets;
        RectF::from_ltwh(i.left as f64, i.top as f64, self.config.plot_width(), self.config.plot_height())
    }

    /// Clickable box of the axis label for `field`, in surface pixels.
    pub fn label_rect(&self, field: AxisField) -> RectF {
        let plot = self.plot_rect();
        let baseline = label_baseline(&plot, field);
        // rough glyph box; good enough for hit testing without a font
        let w = field.axis_title().chars().count() as f64 * LABEL_SIZE * 0.55;
        RectF::from_ltrb(plot.center_x() - w * 0.5, baseline - LABEL_SIZE, plot.center_x() + w * 0.5, baseline + 4.0)
    }

    pub fn label_at(&self, x: f64, y: f64) -> Option<AxisField> {
        AxisField::ALL.into_iter().find(|f| self.label_rect(*f).contains(x, y))
    }

    /// Pointer press at surface pixel `(x, y)`; selects a field when it hits a label.
    pub fn click(&mut self, x: f64, y: f64) -> Result<bool> {
        match self.label_at(x, y) {
            Some(field) => self.select(field),
            None => Ok(false),
        }
    }

    /// Pointer moved to surface pixel `(x, y)`; returns the tooltip under it.
    pub fn hover(&mut self, x: f64, y: f64) -> Option<&str> {
        let plot = self.plot_rect();
        self.scene.hover(x - plot.left, y - plot.top)
    }

    pub fn clear_hover(&mut self) {
        self.scene.clear_hover();
    }

    /// Render the current frame to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Raster("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (self.config.width, self.config.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Raster("read pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if !self.scene.is_attached() {
            return Err(ChartError::RenderTargetUnavailable);
        }
        let mut surface = skia::surfaces::raster_n32_premul((self.config.width, self.config.height))
            .ok_or_else(|| ChartError::Raster("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let frame = self.scene.frame();
        let plot = self.plot_rect();
        let fonts = Fonts::new();
        draw_grid(canvas, &plot, &frame, &opts.theme);
        draw_axes(canvas, &plot, &frame, opts, &fonts);
        draw_marks(canvas, &plot, &frame, opts, &fonts);
        if opts.draw_labels {
            draw_titles(canvas, &plot, &frame, &opts.theme, &fonts, self.config.insets.left as f32);
            draw_tooltip(canvas, &plot, &frame, &opts.theme, &fonts, self.config.width as f32);
        }
        Ok(surface)
    }
}

fn label_baseline(plot: &RectF, field: AxisField) -> f64 {
    let offset = match field {
        AxisField::Poverty => 20.0,
        AxisField::Age => 40.0,
    };
    plot.bottom + 20.0 + offset
}

// ---- helpers ----------------------------------------------------------------

fn paint(color: skia::Color, alpha: f64) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(color);
    p.set_alpha_f(color.a() as f32 / 255.0 * alpha.clamp(0.0, 1.0) as f32);
    p
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectF, frame: &Frame, theme: &Theme) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for tick in &frame.x_ticks {
        let mut p = paint(theme.grid, tick.opacity);
        p.set_stroke_width(1.0);
        let x = l + tick.pos as f32;
        canvas.draw_line((x, t), (x, b), &p);
    }
    for tick in &frame.y_ticks {
        let mut p = paint(theme.grid, tick.opacity);
        p.set_stroke_width(1.0);
        let y = t + tick.pos as f32;
        canvas.draw_line((l, y), (r, y), &p);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectF, frame: &Frame, opts: &RenderOptions, fonts: &Fonts) {
    let theme = &opts.theme;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let mut axis_paint = paint(theme.axis_line, 1.0);
    axis_paint.set_stroke_width(1.5);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let font = fonts.font(TICK_SIZE, false);
    for tick in &frame.x_ticks {
        let x = l + tick.pos as f32;
        let p = paint(theme.tick, tick.opacity);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &p);
        if opts.draw_labels {
            draw_centered(canvas, &tick.label, x, b + TICK_LEN + TICK_SIZE + 2.0, &font, &p);
        }
    }
    for tick in &frame.y_ticks {
        let y = t + tick.pos as f32;
        let p = paint(theme.tick, tick.opacity);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &p);
        if opts.draw_labels {
            draw_right(canvas, &tick.label, l - TICK_LEN - 3.0, y + TICK_SIZE * 0.35, &font, &p);
        }
    }
}

fn draw_marks(canvas: &skia::Canvas, plot: &RectF, frame: &Frame, opts: &RenderOptions, fonts: &Fonts) {
    let theme = &opts.theme;
    let font = fonts.font(9.0, true);
    for c in &frame.circles {
        let center = ((plot.left + c.cx) as f32, (plot.top + c.cy) as f32);
        let fill = paint(theme.mark_fill, c.opacity);
        canvas.draw_circle(center, c.radius as f32, &fill);

        let mut stroke = paint(theme.mark_stroke, c.opacity);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        canvas.draw_circle(center, c.radius as f32, &stroke);

        if let (true, Some(text)) = (opts.draw_labels, c.text.as_deref()) {
            let p = paint(theme.mark_text, 1.0);
            draw_centered(canvas, text, center.0, center.1 + 3.0, &font, &p);
        }
    }
}

fn draw_titles(canvas: &skia::Canvas, plot: &RectF, frame: &Frame, theme: &Theme, fonts: &Fonts, left_margin: f32) {
    for (field, state) in &frame.labels {
        let active = *state == LabelState::Active;
        let color = if active { theme.label_active } else { theme.label_inactive };
        let font = fonts.font(LABEL_SIZE as f32, active);
        let baseline = label_baseline(plot, *field) as f32;
        draw_centered(canvas, field.axis_title(), plot.center_x() as f32, baseline, &font, &paint(color, 1.0));
    }

    // y title, rotated into the left margin
    let font = fonts.font(LABEL_SIZE as f32, true);
    let x = plot.left as f32 - left_margin + LABEL_SIZE as f32;
    let y = (plot.top + plot.height() * 0.5) as f32;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(x, y)));
    draw_centered(canvas, Y_AXIS_TITLE, x, y, &font, &paint(theme.label_active, 1.0));
    canvas.restore();
}

fn draw_tooltip(canvas: &skia::Canvas, plot: &RectF, frame: &Frame, theme: &Theme, fonts: &Fonts, surface_width: f32) {
    let Some(tip) = &frame.tooltip else { return };
    let font = fonts.font(12.0, false);
    let lines: Vec<&str> = tip.text.lines().collect();
    let line_h = 16.0f32;
    let pad = 6.0f32;
    let w = lines.iter().map(|s| measure_width(&font, s)).fold(0.0f32, f32::max) + pad * 2.0;
    let h = line_h * lines.len() as f32 + pad * 2.0;

    let (ax, ay) = ((plot.left + tip.anchor.0) as f32, (plot.top + tip.anchor.1) as f32);
    // prefer the right side of the mark, flip left near the edge
    let mut x = ax + 12.0;
    if x + w > surface_width {
        x = ax - 12.0 - w;
    }
    let y = (ay - h * 0.5).max(0.0);

    let bg = paint(theme.tooltip_background, 1.0);
    canvas.draw_round_rect(skia::Rect::from_xywh(x, y, w, h), 4.0, 4.0, &bg);
    let p = paint(theme.tooltip_text, 1.0);
    for (i, line) in lines.iter().enumerate() {
        let baseline = y + pad + line_h * (i as f32 + 1.0) - 4.0;
        canvas.draw_str(line, (x + pad, baseline), &font, &p);
    }
}
