//! Widget callbacks operating on injected models.
//!
//! Each function or handler here takes the data source and ranges it works on
//! directly; looking models up by name is left to
//! [`ScatterController`](crate::controller::ScatterController).

pub mod autoscale;
pub mod axes;
pub mod mirror;
pub mod search;
pub mod subset;

pub use autoscale::{AutoscaleOutcome, AxisUpdate, Extent, RangeAutoscale, DEFAULT_PADDING};
pub use axes::{axis_options, select_axes};
pub use mirror::SelectionMirror;
pub use search::SearchFilter;
pub use subset::{select_subset, subset_options, subset_rows};
