// File: crates/scatter-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface capability used by the marks, tooltips and controller.

use crate::axis::{AxisSide, LabelState};
use crate::data::AxisField;
use crate::error::Result;
use crate::scale::LinearScale;
use crate::transition::TransitionSpec;

/// Animatable attribute of a circle mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkAttr {
    Cx,
    Cy,
    Opacity,
}

/// Initial geometry of a circle mark, in plot-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleSpec {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
    /// Text drawn centered on the circle.
    pub text: Option<String>,
}

/// A retained surface that owns marks, axes, labels and tooltips.
///
/// Every call fails with `ChartError::RenderTargetUnavailable` once the
/// underlying target is gone. Timing is the surface's business: callers only
/// describe the target value and the transition to reach it.
pub trait RenderSurface {
    /// Create (or replace) the circle stored under `key`.
    fn create_circle(&mut self, key: &str, circle: CircleSpec) -> Result<()>;

    /// Move `attr` of mark `key` to `value`, starting from wherever it is now.
    fn animate_attribute(&mut self, key: &str, attr: MarkAttr, value: f64, transition: TransitionSpec) -> Result<()>;

    /// Redraw the ticks of one axis for `scale`.
    fn animate_axis(&mut self, side: AxisSide, scale: &LinearScale, transition: TransitionSpec) -> Result<()>;

    /// Text shown while the pointer hovers mark `key`.
    fn set_tooltip(&mut self, key: &str, text: String) -> Result<()>;

    fn set_label_state(&mut self, field: AxisField, state: LabelState) -> Result<()>;
}
