//! egui front-end for a scatter view.

mod scatter_ui;

pub use scatter_ui::ScatterPanel;
