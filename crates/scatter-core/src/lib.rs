// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter chart API, axis controller and rendering.

pub mod axis;
pub mod chart;
pub mod controller;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod loader;
pub mod marks;
pub mod scale;
pub mod scene;
pub mod surface;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod transition;
pub mod types;

pub use axis::{AxisSide, LabelState};
pub use chart::{RenderOptions, ScatterChart};
pub use controller::AxisController;
pub use data::{AxisField, Dataset, Record};
pub use error::{ChartError, DataLoadError, Result};
pub use loader::{load_csv_path, load_csv_reader, ColumnNames};
pub use marks::{MarkRenderer, Marks};
pub use scale::{compute_scale, obesity_scale, LinearScale};
pub use scene::Scene;
pub use surface::{CircleSpec, MarkAttr, RenderSurface};
pub use theme::Theme;
pub use tooltip::{tooltip_text, TooltipBinder};
pub use transition::{Clock, Easing, ManualClock, SystemClock, TransitionSpec};
pub use types::{ChartConfig, Insets};
