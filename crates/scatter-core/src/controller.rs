// File: crates/scatter-core/src/controller.rs
// Summary: AxisController; owns the (field, scale) pair and drives every axis switch.

use std::sync::Arc;

use crate::axis::{label_states, AxisSide};
use crate::data::{AxisField, Dataset};
use crate::error::Result;
use crate::marks::{MarkRenderer, Marks};
use crate::scale::{compute_scale, obesity_scale, LinearScale};
use crate::surface::RenderSurface;
use crate::tooltip::TooltipBinder;
use crate::transition::TransitionSpec;
use crate::types::ChartConfig;

/// Sole owner of the active horizontal field and its scale.
///
/// The pair is replaced as a unit: once `select` returns, both reflect the
/// new field even though the surface may still be animating towards it.
#[derive(Debug)]
pub struct AxisController {
    dataset: Arc<Dataset>,
    field: AxisField,
    x_scale: LinearScale,
    y_scale: LinearScale,
    range: (f64, f64),
    marks: Marks,
    renderer: MarkRenderer,
    tooltips: TooltipBinder,
    transition: TransitionSpec,
}

impl AxisController {
    /// Initial draw: poverty scale, static obesity scale, marks, axes, tooltips, labels.
    pub fn initialize<S: RenderSurface + ?Sized>(
        surface: &mut S,
        dataset: Arc<Dataset>,
        config: &ChartConfig,
    ) -> Result<Self> {
        let field = AxisField::default();
        let range = (0.0, config.plot_width());
        let x_scale = compute_scale(&dataset, field, range.0, range.1)?;
        let y_scale = obesity_scale(&dataset, config.plot_height())?;

        let renderer = MarkRenderer::new(config.mark_radius, config.mark_opacity);
        surface.animate_axis(AxisSide::Bottom, &x_scale, TransitionSpec::immediate())?;
        surface.animate_axis(AxisSide::Left, &y_scale, TransitionSpec::immediate())?;
        let marks = renderer.render(surface, &dataset, field, &x_scale, &y_scale)?;

        let mut tooltips = TooltipBinder::new(field);
        tooltips.bind(surface, &marks, &dataset, field)?;
        for (f, state) in label_states(field) {
            surface.set_label_state(f, state)?;
        }
        tracing::info!(records = dataset.len(), %field, "chart initialized");

        Ok(Self {
            dataset,
            field,
            x_scale,
            y_scale,
            range,
            marks,
            renderer,
            tooltips,
            transition: config.transition,
        })
    }

    pub fn field(&self) -> AxisField {
        self.field
    }

    pub fn scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Field the tooltips currently describe.
    pub fn tooltip_field(&self) -> AxisField {
        self.tooltips.active_field()
    }

    pub fn transition(&self) -> TransitionSpec {
        self.transition
    }

    /// Switch the horizontal axis to `field`.
    ///
    /// Returns `Ok(false)` without touching anything when `field` is already
    /// active. A scale failure leaves the previous state in place; a surface
    /// failure is fatal and is not rolled back.
    pub fn select<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, field: AxisField) -> Result<bool> {
        if field == self.field {
            tracing::debug!(%field, "selection unchanged");
            return Ok(false);
        }
        let scale = compute_scale(&self.dataset, field, self.range.0, self.range.1)?;
        self.field = field;
        self.x_scale = scale;
        tracing::info!(%field, domain_min = scale.domain_min, domain_max = scale.domain_max, "x axis switched");

        // marks and ticks start together and run independently
        self.renderer
            .reposition(surface, &self.marks, &self.dataset, field, &scale, self.transition)?;
        surface.animate_axis(AxisSide::Bottom, &scale, self.transition)?;
        self.tooltips.bind(surface, &self.marks, &self.dataset, field)?;
        for (f, state) in label_states(field) {
            surface.set_label_state(f, state)?;
        }
        Ok(true)
    }
}
