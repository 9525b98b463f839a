// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scales and the factory deriving them from the dataset.

use crate::data::{AxisField, Dataset};
use crate::error::{ChartError, Result};
use crate::grid;

/// Lower domain bound is pulled below the smallest value by this factor.
pub const DOMAIN_MIN_PADDING: f64 = 0.8;
/// Upper domain bound relative to the largest value.
pub const DOMAIN_MAX_PADDING: f64 = 1.0;

/// Linear map `[domain_min, domain_max] -> [range_min, range_max]`.
///
/// An empty domain span maps every input to `range_min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_min: f64,
    pub range_max: f64,
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return self.range_min;
        }
        self.range_min + (v - self.domain_min) / span * (self.range_max - self.range_min)
    }

    /// Inverse mapping; an empty range maps back to `domain_min`.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.range_max - self.range_min;
        if span == 0.0 {
            return self.domain_min;
        }
        self.domain_min + (px - self.range_min) / span * (self.domain_max - self.domain_min)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// Round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain_min, self.domain_max, count)
    }
}

/// Horizontal scale for `field`: `[0.8 * min, 1.0 * max] -> [range_min, range_max]`.
pub fn compute_scale(dataset: &Dataset, field: AxisField, range_min: f64, range_max: f64) -> Result<LinearScale> {
    let (lo, hi) = dataset.extent(|r| field.value(r)).ok_or(ChartError::EmptyDataset)?;
    let domain = (lo * DOMAIN_MIN_PADDING, hi * DOMAIN_MAX_PADDING);
    tracing::debug!(%field, domain_min = domain.0, domain_max = domain.1, "computed x scale");
    checked(domain, (range_min, range_max))
}

/// Vertical obesity scale: `[0, max] -> [plot_height, 0]` so larger values sit higher.
pub fn obesity_scale(dataset: &Dataset, plot_height: f64) -> Result<LinearScale> {
    let (_, hi) = dataset.extent(|r| r.obesity_rate).ok_or(ChartError::EmptyDataset)?;
    checked((0.0, hi), (plot_height, 0.0))
}

fn checked(domain: (f64, f64), range: (f64, f64)) -> Result<LinearScale> {
    if domain.0 == domain.1 {
        return Err(ChartError::DegenerateDomain { min: domain.0, max: domain.1 });
    }
    if range.0 == range.1 {
        return Err(ChartError::DegenerateRange { min: range.0, max: range.1 });
    }
    Ok(LinearScale::new(domain, range))
}
