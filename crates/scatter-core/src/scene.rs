// File: crates/scatter-core/src/scene.rs
// Summary: Retained scene implementing RenderSurface; owns animated marks, axis ticks, labels and hover state.

use std::collections::HashMap;
use std::time::Duration;

use crate::axis::{axis_ticks, AxisSide, LabelState};
use crate::data::AxisField;
use crate::error::{ChartError, Result};
use crate::scale::LinearScale;
use crate::surface::{CircleSpec, MarkAttr, RenderSurface};
use crate::transition::{AnimatedValue, Clock, TransitionSpec};

struct Circle {
    key: String,
    cx: AnimatedValue,
    cy: AnimatedValue,
    opacity: AnimatedValue,
    radius: f64,
    text: Option<String>,
    tooltip: Option<String>,
}

struct TickState {
    value: f64,
    label: String,
    pos: AnimatedValue,
    opacity: AnimatedValue,
    exiting: bool,
}

#[derive(Default)]
struct AxisState {
    scale: Option<LinearScale>,
    ticks: Vec<TickState>,
}

/// Circle as it should be drawn at the frame's instant.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleFrame {
    pub key: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickFrame {
    /// Position along the axis, in plot-local pixels.
    pub pos: f64,
    pub label: String,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipFrame {
    /// Center of the hovered mark.
    pub anchor: (f64, f64),
    pub text: String,
}

/// Everything needed to rasterize one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub circles: Vec<CircleFrame>,
    pub x_ticks: Vec<TickFrame>,
    pub y_ticks: Vec<TickFrame>,
    pub labels: Vec<(AxisField, LabelState)>,
    pub tooltip: Option<TooltipFrame>,
}

/// In-memory drawing surface in plot-local coordinates.
pub struct Scene {
    clock: Box<dyn Clock>,
    attached: bool,
    tick_count: usize,
    circles: Vec<Circle>,
    index: HashMap<String, usize>,
    x_axis: AxisState,
    y_axis: AxisState,
    labels: HashMap<AxisField, LabelState>,
    hovered: Option<usize>,
    transitions_started: u64,
}

impl Scene {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            attached: true,
            tick_count: 10,
            circles: Vec::new(),
            index: HashMap::new(),
            x_axis: AxisState::default(),
            y_axis: AxisState::default(),
            labels: HashMap::new(),
            hovered: None,
            transitions_started: 0,
        }
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Drop the render target; later surface calls fail.
    pub fn detach(&mut self) {
        self.attached = false;
        self.hovered = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Number of timed transitions started so far (marks and axis ticks).
    pub fn transitions_started(&self) -> u64 {
        self.transitions_started
    }

    pub fn is_animating(&self) -> bool {
        let now = self.now();
        let axis_busy = |a: &AxisState| a.ticks.iter().any(|t| t.pos.is_animating(now) || t.opacity.is_animating(now));
        self.circles
            .iter()
            .any(|c| c.cx.is_animating(now) || c.cy.is_animating(now) || c.opacity.is_animating(now))
            || axis_busy(&self.x_axis)
            || axis_busy(&self.y_axis)
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.circles.iter().map(|c| c.key.as_str())
    }

    /// Current (possibly interpolated) center of mark `key`.
    pub fn position(&self, key: &str) -> Option<(f64, f64)> {
        let now = self.now();
        self.circle(key).map(|c| (c.cx.value_at(now), c.cy.value_at(now)))
    }

    /// Center of mark `key` once its transitions complete.
    pub fn target_position(&self, key: &str) -> Option<(f64, f64)> {
        self.circle(key).map(|c| (c.cx.target(), c.cy.target()))
    }

    pub fn tooltip(&self, key: &str) -> Option<&str> {
        self.circle(key).and_then(|c| c.tooltip.as_deref())
    }

    pub fn label_state(&self, field: AxisField) -> Option<LabelState> {
        self.labels.get(&field).copied()
    }

    pub fn axis_scale(&self, side: AxisSide) -> Option<&LinearScale> {
        self.axis(side).scale.as_ref()
    }

    /// Ticks of one axis at the current instant, finished exits excluded.
    pub fn ticks(&self, side: AxisSide) -> Vec<TickFrame> {
        tick_frames(self.axis(side), self.now())
    }

    /// Key of the topmost mark under plot-local point `(x, y)`.
    pub fn mark_at(&self, x: f64, y: f64) -> Option<&str> {
        self.hit(x, y).map(|i| self.circles[i].key.as_str())
    }

    /// Hover the point; returns the tooltip of the mark under it, if any.
    pub fn hover(&mut self, x: f64, y: f64) -> Option<&str> {
        self.hovered = if self.attached { self.hit(x, y) } else { None };
        self.hovered.and_then(|i| self.circles[i].tooltip.as_deref())
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.map(|i| self.circles[i].key.as_str())
    }

    /// Resolve every animated value at the current instant.
    pub fn frame(&self) -> Frame {
        let now = self.now();
        let circles = self
            .circles
            .iter()
            .map(|c| CircleFrame {
                key: c.key.clone(),
                cx: c.cx.value_at(now),
                cy: c.cy.value_at(now),
                radius: c.radius,
                opacity: c.opacity.value_at(now),
                text: c.text.clone(),
            })
            .collect();
        let tooltip = self.hovered.and_then(|i| {
            let c = &self.circles[i];
            c.tooltip.as_ref().map(|text| TooltipFrame {
                anchor: (c.cx.value_at(now), c.cy.value_at(now)),
                text: text.clone(),
            })
        });
        let labels = AxisField::ALL
            .iter()
            .filter_map(|f| self.labels.get(f).map(|s| (*f, *s)))
            .collect();
        Frame {
            circles,
            x_ticks: tick_frames(&self.x_axis, now),
            y_ticks: tick_frames(&self.y_axis, now),
            labels,
            tooltip,
        }
    }

    fn circle(&self, key: &str) -> Option<&Circle> {
        self.index.get(key).map(|&i| &self.circles[i])
    }

    fn axis(&self, side: AxisSide) -> &AxisState {
        match side {
            AxisSide::Bottom => &self.x_axis,
            AxisSide::Left => &self.y_axis,
        }
    }

    fn hit(&self, x: f64, y: f64) -> Option<usize> {
        let now = self.now();
        // last drawn is on top
        self.circles.iter().rposition(|c| {
            let dx = c.cx.value_at(now) - x;
            let dy = c.cy.value_at(now) - y;
            dx * dx + dy * dy <= c.radius * c.radius
        })
    }

    fn ensure_attached(&self) -> Result<()> {
        if self.attached { Ok(()) } else { Err(ChartError::RenderTargetUnavailable) }
    }
}

fn tick_frames(axis: &AxisState, now: Duration) -> Vec<TickFrame> {
    axis.ticks
        .iter()
        .filter(|t| !(t.exiting && !t.opacity.is_animating(now)))
        .map(|t| TickFrame {
            pos: t.pos.value_at(now),
            label: t.label.clone(),
            opacity: t.opacity.value_at(now),
        })
        .collect()
}

impl RenderSurface for Scene {
    fn create_circle(&mut self, key: &str, circle: CircleSpec) -> Result<()> {
        self.ensure_attached()?;
        let c = Circle {
            key: key.to_string(),
            cx: AnimatedValue::new(circle.cx),
            cy: AnimatedValue::new(circle.cy),
            opacity: AnimatedValue::new(circle.opacity),
            radius: circle.radius,
            text: circle.text,
            tooltip: None,
        };
        match self.index.get(key) {
            Some(&i) => self.circles[i] = c,
            None => {
                self.index.insert(key.to_string(), self.circles.len());
                self.circles.push(c);
            }
        }
        Ok(())
    }

    fn animate_attribute(&mut self, key: &str, attr: MarkAttr, value: f64, transition: TransitionSpec) -> Result<()> {
        self.ensure_attached()?;
        let now = self.now();
        let &i = self.index.get(key).ok_or_else(|| ChartError::UnknownMark(key.to_string()))?;
        let c = &mut self.circles[i];
        let target = match attr {
            MarkAttr::Cx => &mut c.cx,
            MarkAttr::Cy => &mut c.cy,
            MarkAttr::Opacity => &mut c.opacity,
        };
        if target.retarget(value, now, transition) {
            self.transitions_started += 1;
        }
        Ok(())
    }

    fn animate_axis(&mut self, side: AxisSide, scale: &LinearScale, transition: TransitionSpec) -> Result<()> {
        self.ensure_attached()?;
        let now = self.now();
        let wanted = axis_ticks(scale, self.tick_count);
        let axis = match side {
            AxisSide::Bottom => &mut self.x_axis,
            AxisSide::Left => &mut self.y_axis,
        };
        let previous = axis.scale.replace(*scale);
        let timed = !transition.is_immediate() && previous.is_some();
        if !timed {
            axis.ticks = wanted
                .into_iter()
                .map(|t| TickState {
                    pos: AnimatedValue::new(scale.apply(t.value)),
                    opacity: AnimatedValue::new(1.0),
                    value: t.value,
                    label: t.label,
                    exiting: false,
                })
                .collect();
            return Ok(());
        }

        let mut started = 0u64;
        axis.ticks.retain(|t| !(t.exiting && !t.opacity.is_animating(now)));
        // updating and exiting ticks slide to where the new scale puts them
        for tick in &mut axis.ticks {
            let keep = wanted.iter().any(|w| w.label == tick.label);
            tick.exiting = !keep;
            started += tick.pos.retarget(scale.apply(tick.value), now, transition) as u64;
            started += tick.opacity.retarget(if keep { 1.0 } else { 0.0 }, now, transition) as u64;
        }
        // entering ticks start where the old scale would have drawn them
        let old = previous.unwrap_or(*scale);
        for w in wanted {
            if axis.ticks.iter().any(|t| t.label == w.label) {
                continue;
            }
            let mut pos = AnimatedValue::new(old.apply(w.value));
            let mut opacity = AnimatedValue::new(0.0);
            started += pos.retarget(scale.apply(w.value), now, transition) as u64;
            started += opacity.retarget(1.0, now, transition) as u64;
            axis.ticks.push(TickState { value: w.value, label: w.label, pos, opacity, exiting: false });
        }
        axis.ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
        self.transitions_started += started;
        Ok(())
    }

    fn set_tooltip(&mut self, key: &str, text: String) -> Result<()> {
        self.ensure_attached()?;
        let &i = self.index.get(key).ok_or_else(|| ChartError::UnknownMark(key.to_string()))?;
        self.circles[i].tooltip = Some(text);
        Ok(())
    }

    fn set_label_state(&mut self, field: AxisField, state: LabelState) -> Result<()> {
        self.ensure_attached()?;
        self.labels.insert(field, state);
        Ok(())
    }
}
