// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for scatter rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub label_active: skia::Color,
    pub label_inactive: skia::Color,
    pub mark_fill: skia::Color,
    pub mark_stroke: skia::Color,
    pub mark_text: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 236, 236, 240),
            axis_line: skia::Color::from_argb(255, 40, 40, 40),
            tick: skia::Color::from_argb(255, 60, 60, 60),
            label_active: skia::Color::from_argb(255, 0, 0, 0),
            label_inactive: skia::Color::from_argb(255, 170, 170, 170),
            mark_fill: skia::Color::from_argb(255, 0x89, 0xbd, 0xd3),
            mark_stroke: skia::Color::from_argb(255, 0xe3, 0xe3, 0xe3),
            mark_text: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_background: skia::Color::from_argb(230, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            label_active: skia::Color::from_argb(255, 235, 235, 245),
            label_inactive: skia::Color::from_argb(255, 100, 100, 110),
            mark_fill: skia::Color::from_argb(255, 64, 160, 255),
            mark_stroke: skia::Color::from_argb(255, 30, 30, 36),
            mark_text: skia::Color::from_argb(255, 18, 18, 20),
            tooltip_background: skia::Color::from_argb(235, 235, 235, 245),
            tooltip_text: skia::Color::from_argb(255, 18, 18, 20),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            label_active: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            label_inactive: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            mark_fill: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            mark_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            mark_text: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            tooltip_background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_text: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
