// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, chart configuration).

use crate::loader::ColumnNames;
use crate::transition::TransitionSpec;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 50, 50, 100)
    }
}

/// Everything that shapes the chart apart from the data itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Applied to marks and the x axis on every selection change.
    pub transition: TransitionSpec,
    pub mark_radius: f64,
    pub mark_opacity: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    pub columns: ColumnNames,
}

impl ChartConfig {
    /// Width of the plotting area (surface minus left/right margins).
    pub fn plot_width(&self) -> f64 {
        (self.width as f64 - self.insets.hsum() as f64).max(0.0)
    }

    /// Height of the plotting area (surface minus top/bottom margins).
    pub fn plot_height(&self) -> f64 {
        (self.height as f64 - self.insets.vsum() as f64).max(0.0)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            transition: TransitionSpec::default(),
            mark_radius: 8.0,
            mark_opacity: 0.8,
            tick_count: 10,
            columns: ColumnNames::default(),
        }
    }
}
