//! scatterview crate root: re-exports and module wiring.
//!
//! Callbacks for an interactive scatter plot:
//! - `callbacks`: search box, subset menu, X/Y menus, range autoscale and the
//!   selection mirror, each operating on models passed in directly
//! - `data`: values, data sources, selections, axis ranges and the registry
//! - `controller`: resolves model names and runs the callbacks per trigger
//! - `events`: subscription channel reporting what the callbacks did
//! - `config`: model names and callback parameters
//! - `panels` / `app` (feature `ui`): egui front-end

pub mod callbacks;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;

#[cfg(feature = "ui")]
pub mod app;
#[cfg(feature = "ui")]
pub mod panels;

// Public re-exports for a compact external API
pub use callbacks::{AutoscaleOutcome, AxisUpdate, RangeAutoscale, SearchFilter, SelectionMirror};
pub use config::{load_config_from_path, save_config_to_path, ScatterConfig};
pub use controller::ScatterController;
pub use data::overlay::{GuideLine, Guides, PointLabel};
pub use data::range::{AxisRange, AxisScale};
pub use data::registry::{ModelRegistry, SharedSource};
pub use data::selection::Selection;
pub use data::source::{DataSource, SelectionListener};
pub use data::value::{ColumnKind, Value};
pub use error::{Error, Result};
pub use events::{EventController, EventFilter, EventKind, ScatterEvent};

#[cfg(feature = "ui")]
pub use app::{run_scatter, ScatterApp};
#[cfg(feature = "ui")]
pub use panels::ScatterPanel;
