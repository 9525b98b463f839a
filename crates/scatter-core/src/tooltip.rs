// File: crates/scatter-core/src/tooltip.rs
// Summary: Hover text per mark, parameterized by the active axis field.

use crate::data::{AxisField, Dataset, Record};
use crate::error::Result;
use crate::marks::Marks;
use crate::surface::RenderSurface;

/// `"<name>\n<label>: <value><unit>\nObesity: <obesity>%"`
pub fn tooltip_text(record: &Record, field: AxisField) -> String {
    format!(
        "{}\n{}: {}{}\nObesity: {}%",
        record.name,
        field.tooltip_label(),
        field.value(record),
        field.unit_suffix(),
        record.obesity_rate,
    )
}

/// Keeps mark tooltips in step with the active field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TooltipBinder {
    active: AxisField,
}

impl TooltipBinder {
    pub fn new(active: AxisField) -> Self {
        Self { active }
    }

    pub fn active_field(&self) -> AxisField {
        self.active
    }

    /// Attach text for `field` to every mark, replacing the previous binding.
    pub fn bind<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        marks: &Marks,
        dataset: &Dataset,
        field: AxisField,
    ) -> Result<()> {
        self.active = field;
        for (record, key) in dataset.iter().zip(marks.keys()) {
            surface.set_tooltip(key, tooltip_text(record, field))?;
        }
        Ok(())
    }
}
