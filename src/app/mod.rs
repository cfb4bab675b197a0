//! Standalone window hosting a [`ScatterPanel`](crate::panels::ScatterPanel).

mod run;

pub use run::{run_scatter, ScatterApp};
