// File: crates/scatter-core/src/axis.rs
// Summary: Axis model: sides, tick marks with labels, and selectable label states.

use crate::data::AxisField;
use crate::grid::{format_tick, tick_step};
use crate::scale::LinearScale;

/// Title drawn next to the fixed vertical axis.
pub const Y_AXIS_TITLE: &str = "Obese (%)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSide {
    Bottom,
    Left,
}

/// Styling flag of a clickable axis label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelState {
    Active,
    Inactive,
}

impl LabelState {
    pub fn is_active(self) -> bool {
        self == LabelState::Active
    }
}

/// Label states for both fields with exactly one of them active.
pub fn label_states(active: AxisField) -> [(AxisField, LabelState); 2] {
    AxisField::ALL.map(|f| {
        let state = if f == active { LabelState::Active } else { LabelState::Inactive };
        (f, state)
    })
}

/// A tick value with its rendered text. Ticks are identified by `label`.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Ticks for `scale`, labelled with a precision matching their spacing.
pub fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let step = tick_step(scale.domain_min, scale.domain_max, count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick { value, label: format_tick(value, step) })
        .collect()
}
