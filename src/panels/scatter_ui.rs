use std::collections::HashMap;

use egui::{Align2, Color32, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::callbacks::{axis_options, subset_options};
use crate::controller::ScatterController;
use crate::data::export::default_table_file_name;
use crate::data::overlay::{nearest_row, point_color, Guides};
use crate::data::range::AxisScale;
use crate::error::Result;

const SELECTED_COLOR: Color32 = Color32::from_rgb(255, 165, 0);
/// Unmultiplied default point color, used without a color column.
const POINT_RGBA: [u8; 4] = [0, 0, 0, 128];
const DIMMED_ALPHA: u8 = 25;
const GUIDE_COLOR: Color32 = Color32::GRAY;
/// Hover radius as a fraction of the visible plot size.
const HOVER_DISTANCE: f64 = 0.02;

/// Scatter plot with search box, subset and axis menus, and the selection
/// table, driving a [`ScatterController`].
pub struct ScatterPanel {
    controller: ScatterController,
    query: String,
    subset: String,
    x_choice: String,
    y_choice: String,
    /// Draw labels next to the selected points.
    show_labels: bool,
    /// Push the axis ranges into the plot on the next frame.
    bounds_dirty: bool,
    last_error: Option<String>,
}

impl ScatterPanel {
    pub fn new(controller: ScatterController) -> Self {
        let (x_choice, y_choice) = controller
            .axes()
            .map(|(x, y)| (x.to_string(), y.to_string()))
            .unwrap_or_else(|| {
                let cfg = controller.config();
                (cfg.x_column.clone(), cfg.y_column.clone())
            });
        let show_labels = controller.config().show_labels;
        Self {
            controller,
            show_labels,
            query: String::new(),
            subset: String::new(),
            x_choice,
            y_choice,
            bounds_dirty: true,
            last_error: None,
        }
    }

    pub fn controller(&self) -> &ScatterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScatterController {
        self.bounds_dirty = true;
        &mut self.controller
    }

    fn report<T>(&mut self, res: Result<T>) -> Option<T> {
        match res {
            Ok(v) => {
                self.last_error = None;
                Some(v)
            }
            Err(e) => {
                tracing::error!(error = %e, "scatter callback failed");
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    /// Menus, search box and buttons.
    pub fn render_controls(&mut self, ui: &mut Ui) {
        let (options, subsets) = match self.controller.source() {
            Ok(src) => {
                let src = src.borrow();
                let cfg = self.controller.config();
                (
                    axis_options(&src, &cfg.x_column, &cfg.y_column),
                    subset_options(&src),
                )
            }
            Err(_) => (Vec::new(), Vec::new()),
        };

        let (old_x, old_y) = (self.x_choice.clone(), self.y_choice.clone());
        egui::ComboBox::from_label("X")
            .selected_text(self.x_choice.as_str())
            .show_ui(ui, |ui| {
                for opt in &options {
                    ui.selectable_value(&mut self.x_choice, opt.clone(), opt.as_str());
                }
            });
        egui::ComboBox::from_label("Y")
            .selected_text(self.y_choice.as_str())
            .show_ui(ui, |ui| {
                for opt in &options {
                    ui.selectable_value(&mut self.y_choice, opt.clone(), opt.as_str());
                }
            });
        if self.x_choice != old_x || self.y_choice != old_y {
            let (x, y) = (self.x_choice.clone(), self.y_choice.clone());
            let res = self.controller.on_axes_changed(&x, &y);
            if self.report(res).is_some() {
                self.bounds_dirty = true;
            }
        }

        if ui.button("zoom to data limits").clicked() {
            let res = self.controller.on_zoom_to_data();
            if self.report(res).is_some() {
                self.bounds_dirty = true;
            }
        }

        ui.checkbox(&mut self.show_labels, "label selected points");

        ui.label("Search:");
        if ui.text_edit_singleline(&mut self.query).changed() {
            let query = self.query.clone();
            let res = self.controller.on_text_changed(&query);
            self.report(res);
        }

        let old_subset = self.subset.clone();
        egui::ComboBox::from_label("Select subset")
            .selected_text(self.subset.as_str())
            .show_ui(ui, |ui| {
                for opt in &subsets {
                    ui.selectable_value(&mut self.subset, opt.clone(), opt.as_str());
                }
            });
        if self.subset != old_subset {
            let column = self.subset.clone();
            let res = self.controller.on_subset_changed(&column);
            self.report(res);
        }

        if ui.button("Save table to file").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(default_table_file_name())
                .add_filter("CSV", &["csv"])
                .save_file()
            {
                let res = self.controller.export_table(&path);
                self.report(res);
            }
        }

        if let Some(err) = &self.last_error {
            ui.colored_label(Color32::RED, err.as_str());
        }
    }

    /// The scatter plot. Selected points are drawn on top in orange; the rest
    /// fade out while a selection exists. Selected points carry labels when
    /// enabled, and hovering a point shows its tooltip.
    pub fn render_plot(&mut self, ui: &mut Ui) {
        let cfg = self.controller.config().clone();
        let log = cfg.scale == AxisScale::Log;
        let to_plot = |v: f64| {
            if !log {
                Some(v)
            } else if v > 0.0 {
                Some(v.log10())
            } else {
                None
            }
        };
        let to_plot_xy = |x: f64, y: f64| Some([to_plot(x)?, to_plot(y)?]);

        let mut plain: HashMap<Color32, Vec<[f64; 2]>> = HashMap::new();
        let mut selected: Vec<[f64; 2]> = Vec::new();
        let mut candidates: Vec<(usize, [f64; 2])> = Vec::new();
        let mut has_selection = false;
        if let Ok(src) = self.controller.source() {
            let src = src.borrow();
            if let (Ok(xs), Ok(ys)) = (src.column(&cfg.x_column), src.column(&cfg.y_column)) {
                let sel = src.selection();
                has_selection = !sel.is_empty();
                for (row, (xv, yv)) in xs.iter().zip(ys).enumerate() {
                    let Some(point) = xv
                        .as_number()
                        .zip(yv.as_number())
                        .and_then(|(x, y)| to_plot_xy(x, y))
                    else {
                        continue;
                    };
                    candidates.push((row, point));
                    if sel.contains(row) {
                        selected.push(point);
                        continue;
                    }
                    let [r, g, b, a] =
                        point_color(&src, &cfg.color_column, row).unwrap_or(POINT_RGBA);
                    let a = if has_selection { DIMMED_ALPHA } else { a };
                    let color = Color32::from_rgba_unmultiplied(r, g, b, a);
                    plain.entry(color).or_default().push(point);
                }
            }
        }

        let labels: Vec<(PlotPoint, String)> = if self.show_labels {
            self.controller
                .point_labels()
                .unwrap_or_default()
                .into_iter()
                .filter_map(|l| to_plot_xy(l.x, l.y).map(|[x, y]| (PlotPoint::new(x, y), l.text)))
                .collect()
        } else {
            Vec::new()
        };
        let guides: Vec<(Vec<[f64; 2]>, bool)> = self
            .controller
            .guide_lines()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|g| {
                let a = to_plot_xy(g.start[0], g.start[1])?;
                let b = to_plot_xy(g.end[0], g.end[1])?;
                Some((vec![a, b], g.dashed))
            })
            .collect();

        let ranges = match (self.controller.x_range(), self.controller.y_range()) {
            (Ok(x), Ok(y)) => Some(((x.start, x.end), (y.start, y.end))),
            _ => None,
        };
        let push_bounds = std::mem::take(&mut self.bounds_dirty);
        let (x_title, y_title) = self.controller.axis_labels();

        let plot = Plot::new("scatter_plot")
            .allow_boxed_zoom(true)
            .show_grid(cfg.guides == Guides::Grid)
            .x_axis_label(x_title)
            .y_axis_label(y_title)
            .show(ui, |plot_ui| {
                if push_bounds {
                    if let Some(((x0, x1), (y0, y1))) = ranges {
                        if let (Some(x0), Some(x1), Some(y0), Some(y1)) =
                            (to_plot(x0), to_plot(x1), to_plot(y0), to_plot(y1))
                        {
                            plot_ui.set_plot_bounds_x(x0..=x1);
                            plot_ui.set_plot_bounds_y(y0..=y1);
                        }
                    }
                }
                for (i, (pts, dashed)) in guides.into_iter().enumerate() {
                    let style = if dashed {
                        LineStyle::Dashed { length: 6.0 }
                    } else {
                        LineStyle::Solid
                    };
                    plot_ui.line(
                        Line::new(format!("guide {i}"), PlotPoints::from(pts))
                            .color(GUIDE_COLOR)
                            .style(style),
                    );
                }
                for (color, pts) in plain {
                    plot_ui.points(
                        Points::new("points", PlotPoints::from(pts))
                            .radius(3.0)
                            .color(color),
                    );
                }
                if !selected.is_empty() {
                    plot_ui.points(
                        Points::new("selected", PlotPoints::from(selected))
                            .radius(3.5)
                            .color(SELECTED_COLOR),
                    );
                }
                for (pos, text) in labels {
                    plot_ui.text(Text::new("label", pos, text).anchor(Align2::LEFT_BOTTOM));
                }

                let pointer = plot_ui.pointer_coordinate()?;
                let bounds = plot_ui.plot_bounds();
                nearest_row(
                    &candidates,
                    [pointer.x, pointer.y],
                    [bounds.width(), bounds.height()],
                    HOVER_DISTANCE,
                )
            });

        if let Some(row) = plot.inner {
            if let Ok(text) = self.controller.hover_text(row) {
                if !text.is_empty() {
                    plot.response.on_hover_text(text);
                }
            }
        }
    }

    /// Rows of the labels source, i.e. the current selection.
    pub fn render_table(&mut self, ui: &mut Ui) {
        let Ok(labels) = self.controller.labels() else {
            return;
        };
        let labels = labels.borrow();
        let columns: Vec<String> = if self.controller.config().table_columns.is_empty() {
            labels.column_names().to_vec()
        } else {
            self.controller.config().table_columns.clone()
        };

        ui.label(format!("{} selected", labels.row_count()));
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("selection_table")
                    .striped(true)
                    .show(ui, |ui| {
                        for c in &columns {
                            ui.strong(c.as_str());
                        }
                        ui.end_row();
                        for row in 0..labels.row_count() {
                            for c in &columns {
                                let text = labels
                                    .value(c, row)
                                    .map(|v| v.to_string())
                                    .unwrap_or_default();
                                ui.label(text);
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
