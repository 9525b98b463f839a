// File: crates/scatter-core/src/text.rs
// Summary: Font lookup with family fallbacks plus centered/right-aligned text drawing helpers.

use skia_safe as skia;

const FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Regular and bold faces used for chart text.
pub struct Fonts {
    regular: Option<skia::Typeface>,
    bold: Option<skia::Typeface>,
}

impl Fonts {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::default();
        let pick = |style: skia::FontStyle| {
            FAMILIES
                .iter()
                .find_map(|f| mgr.match_family_style(f, style))
                .or_else(|| mgr.legacy_make_typeface(None::<&str>, style))
        };
        Self {
            regular: pick(skia::FontStyle::normal()),
            bold: pick(skia::FontStyle::bold()),
        }
    }

    pub fn font(&self, size: f32, bold: bool) -> skia::Font {
        let face = if bold { self.bold.as_ref().or(self.regular.as_ref()) } else { self.regular.as_ref() };
        match face {
            Some(tf) => skia::Font::new(tf.clone(), size.max(1.0)),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size.max(1.0));
                font
            }
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn measure_width(font: &skia::Font, text: &str) -> f32 {
    font.measure_str(text, None).0
}

/// Draw `text` horizontally centered on `x` with its baseline at `y`.
pub fn draw_centered(canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &skia::Font, paint: &skia::Paint) {
    let w = measure_width(font, text);
    canvas.draw_str(text, (x - w * 0.5, y), font, paint);
}

/// Draw `text` ending at `x` with its baseline at `y`.
pub fn draw_right(canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &skia::Font, paint: &skia::Paint) {
    let w = measure_width(font, text);
    canvas.draw_str(text, (x - w, y), font, paint);
}
