// File: crates/scatter-core/src/marks.rs
// Summary: One circle per record, keyed by state name; initial draw and horizontal repositioning.

use std::collections::HashMap;

use crate::data::{AxisField, Dataset};
use crate::error::Result;
use crate::scale::LinearScale;
use crate::surface::{CircleSpec, MarkAttr, RenderSurface};
use crate::transition::TransitionSpec;

/// Mark keys aligned with dataset order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    keys: Vec<String>,
}

impl Marks {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Stable key per record: the name, with `#n` appended to repeated names.
pub fn mark_keys(dataset: &Dataset) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    dataset
        .iter()
        .map(|r| {
            let n = seen.entry(r.name.as_str()).or_insert(0);
            *n += 1;
            if *n == 1 {
                r.name.clone()
            } else {
                tracing::warn!(name = %r.name, occurrence = *n, "duplicate record name");
                format!("{}#{}", r.name, n)
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkRenderer {
    pub radius: f64,
    pub opacity: f64,
}

impl Default for MarkRenderer {
    fn default() -> Self {
        Self { radius: 8.0, opacity: 0.8 }
    }
}

impl MarkRenderer {
    pub fn new(radius: f64, opacity: f64) -> Self {
        Self { radius, opacity }
    }

    /// Initial draw. The vertical position is fixed here and never recomputed.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        dataset: &Dataset,
        field: AxisField,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
    ) -> Result<Marks> {
        let keys = mark_keys(dataset);
        for (record, key) in dataset.iter().zip(&keys) {
            surface.create_circle(
                key,
                CircleSpec {
                    cx: x_scale.apply(field.value(record)),
                    cy: y_scale.apply(record.obesity_rate),
                    radius: self.radius,
                    opacity: self.opacity,
                    text: record.abbr.clone(),
                },
            )?;
        }
        Ok(Marks { keys })
    }

    /// Animate each mark's horizontal position to `x_scale(record[field])`.
    pub fn reposition<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        marks: &Marks,
        dataset: &Dataset,
        field: AxisField,
        x_scale: &LinearScale,
        transition: TransitionSpec,
    ) -> Result<()> {
        for (record, key) in dataset.iter().zip(marks.keys()) {
            surface.animate_attribute(key, MarkAttr::Cx, x_scale.apply(field.value(record)), transition)?;
        }
        Ok(())
    }
}
