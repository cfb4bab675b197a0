//! Wiring between widget events and the scatter callbacks.
//!
//! [`ScatterController`] owns the [`ModelRegistry`] of one scatter view,
//! resolves model names from [`ScatterConfig`], runs the callbacks on each
//! trigger and reports what happened through its [`EventController`].

use std::path::Path;

use crate::callbacks::autoscale::{AutoscaleOutcome, AxisUpdate, RangeAutoscale};
use crate::callbacks::mirror::SelectionMirror;
use crate::callbacks::search::SearchFilter;
use crate::callbacks::{axes, subset};
use crate::config::ScatterConfig;
use crate::data::export;
use crate::data::overlay::{self, GuideLine, Guides, PointLabel};
use crate::data::range::AxisRange;
use crate::data::registry::{ModelRegistry, SharedSource};
use crate::data::source::DataSource;
use crate::data::value::{ColumnKind, Value};
use crate::data::view::initial_view;
use crate::error::{Error, Result};
use crate::events::{
    AxesMeta, EventController, EventKind, ExportMeta, RangeMeta, ScatterEvent, SearchMeta,
    SelectionMeta, SubsetMeta,
};

pub struct ScatterController {
    registry: ModelRegistry,
    config: ScatterConfig,
    search: SearchFilter,
    autoscale: RangeAutoscale,
    events: EventController,
    /// Table columns currently copied into the plotted x/y columns.
    axes: Option<(String, String)>,
    label_column: Option<String>,
}

impl ScatterController {
    /// Wire the callbacks to models already registered in `registry`.
    ///
    /// The data source and both ranges must exist. Search columns default to
    /// the text columns of the source.
    pub fn new(registry: ModelRegistry, config: ScatterConfig) -> Result<Self> {
        registry.require(&[
            config.source_name.as_str(),
            config.x_range_name.as_str(),
            config.y_range_name.as_str(),
        ])?;
        let source = registry.source(&config.source_name)?;
        let search = match &config.search_columns {
            Some(cols) => SearchFilter::new(cols.iter().cloned()),
            None => SearchFilter::for_text_columns(&source.borrow()),
        };
        let label_column = config
            .label_column
            .clone()
            .or_else(|| source.borrow().columns_of_kind(ColumnKind::Text).into_iter().next());
        let autoscale = RangeAutoscale::new()
            .with_columns(config.x_column.clone(), config.y_column.clone())
            .with_padding(config.padding);
        Ok(Self {
            registry,
            config,
            search,
            autoscale,
            events: EventController::new(),
            axes: None,
            label_column,
        })
    }

    /// Build a complete scatter view around a table.
    ///
    /// The first two numeric columns become x and y unless the table already
    /// has the configured coordinate columns. Alongside the scatter source
    /// this registers the labels source (kept in sync with the selection)
    /// and both axis ranges, initialised to the padded extent of every
    /// numeric column.
    pub fn from_table(mut table: DataSource, config: ScatterConfig) -> Result<Self> {
        if config.labels_source_name == config.source_name {
            return Err(Error::Config(format!(
                "labels source and scatter source are both named '{}'",
                config.source_name
            )));
        }
        table.rename(config.source_name.clone());
        let numeric = table.columns_of_kind(ColumnKind::Numeric);

        let mut axes_choice = None;
        if !(table.has_column(&config.x_column) && table.has_column(&config.y_column)) {
            let (x, y) = match numeric.as_slice() {
                [x, y, ..] => (x.clone(), y.clone()),
                _ => return Err(Error::missing_column(table.name(), &config.x_column)),
            };
            axes::select_axes(&mut table, &x, &y, &config.x_column, &config.y_column)?;
            axes_choice = Some((x, y));
        }

        let limits = initial_view(&table, &numeric, config.scale)?;
        let (x_range, y_range) = match limits {
            Some(l) => (
                l.to_range(config.x_range_name.clone(), config.scale),
                l.to_range(config.y_range_name.clone(), config.scale),
            ),
            None => (
                AxisRange::new(config.x_range_name.clone(), 0.0, 1.0).with_scale(config.scale),
                AxisRange::new(config.y_range_name.clone(), 0.0, 1.0).with_scale(config.scale),
            ),
        };

        let mut registry = ModelRegistry::new();
        let labels = registry.add_source(DataSource::new(config.labels_source_name.clone()));
        let mirrored = table.column_names().to_vec();
        table.add_listener(SelectionMirror::new(labels, mirrored));
        let rows = table.row_count();
        registry.add_source(table);
        registry.add_range(x_range);
        registry.add_range(y_range);

        let mut ctrl = Self::new(registry, config)?;
        ctrl.axes = axes_choice;
        tracing::info!(
            source = %ctrl.config.source_name,
            rows,
            search_columns = ?ctrl.search.columns(),
            "built scatter view"
        );
        Ok(ctrl)
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModelRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    pub fn events(&self) -> &EventController {
        &self.events
    }

    pub fn search_filter(&self) -> &SearchFilter {
        &self.search
    }

    /// Table columns plotted as x and y, if chosen by this controller.
    pub fn axes(&self) -> Option<(&str, &str)> {
        self.axes.as_ref().map(|(x, y)| (x.as_str(), y.as_str()))
    }

    /// Axis titles: the chosen table columns, else the plotted columns.
    pub fn axis_labels(&self) -> (String, String) {
        match &self.axes {
            Some((x, y)) => (x.clone(), y.clone()),
            None => (self.config.x_column.clone(), self.config.y_column.clone()),
        }
    }

    /// Column naming each point, for labels and tooltips.
    pub fn label_column(&self) -> Option<&str> {
        self.label_column.as_deref()
    }

    /// Labels of the selected points, read from the labels source.
    pub fn point_labels(&self) -> Result<Vec<PointLabel>> {
        let Some(label_column) = &self.label_column else {
            return Ok(Vec::new());
        };
        let labels = self.labels()?;
        let labels = labels.borrow();
        overlay::point_labels(
            &labels,
            &self.config.x_column,
            &self.config.y_column,
            label_column,
        )
    }

    /// Tooltip for one row of the scatter source.
    pub fn hover_text(&self, row: usize) -> Result<String> {
        let source = self.source()?;
        let source = source.borrow();
        Ok(overlay::hover_text(
            &source,
            row,
            self.label_column.as_deref(),
            &self.config.hover_columns,
        ))
    }

    /// Diagonal guides over the x range bounds; none in grid mode.
    pub fn guide_lines(&self) -> Result<Vec<GuideLine>> {
        if self.config.guides != Guides::Diagonal {
            return Ok(Vec::new());
        }
        let x = self.x_range()?;
        let bounds = x.bounds.unwrap_or((x.start, x.end));
        Ok(overlay::diagonal_guides(bounds, x.scale).to_vec())
    }

    pub fn source(&self) -> Result<SharedSource> {
        self.registry.source(&self.config.source_name)
    }

    pub fn labels(&self) -> Result<SharedSource> {
        self.registry.source(&self.config.labels_source_name)
    }

    pub fn x_range(&self) -> Result<&AxisRange> {
        self.registry.range(&self.config.x_range_name)
    }

    pub fn y_range(&self) -> Result<&AxisRange> {
        self.registry.range(&self.config.y_range_name)
    }

    /// Search box changed: select the rows matching `text`.
    pub fn on_text_changed(&mut self, text: &str) -> Result<usize> {
        let source = self.source()?;
        let mut source = source.borrow_mut();
        let matches = self.search.apply(&mut source, text)?;

        let mut evt = ScatterEvent::new(EventKind::SEARCH | EventKind::SELECTION_CHANGED);
        evt.search = Some(SearchMeta {
            query: text.to_string(),
            matches,
        });
        evt.selection = Some(selection_meta(&source));
        self.events.emit(evt);
        Ok(matches)
    }

    /// Subset menu changed: select the rows flagged in `column` ("" clears).
    pub fn on_subset_changed(&mut self, column: &str) -> Result<usize> {
        let source = self.source()?;
        let mut source = source.borrow_mut();
        let count = subset::select_subset(&mut source, column)?;

        let mut evt = ScatterEvent::new(EventKind::SUBSET | EventKind::SELECTION_CHANGED);
        evt.subset = Some(SubsetMeta {
            column: column.to_string(),
        });
        evt.selection = Some(selection_meta(&source));
        self.events.emit(evt);
        Ok(count)
    }

    /// Scatter data changed: refit both axis ranges.
    pub fn on_data_changed(&mut self) -> Result<AutoscaleOutcome> {
        self.rescale(EventKind::DATA_CHANGED)
    }

    /// "Zoom to data limits" button.
    pub fn on_zoom_to_data(&mut self) -> Result<AutoscaleOutcome> {
        self.rescale(EventKind::FIT_TO_VIEW)
    }

    /// X/Y menus changed: plot `x` against `y`, then rescale.
    pub fn on_axes_changed(&mut self, x: &str, y: &str) -> Result<AutoscaleOutcome> {
        {
            let source = self.source()?;
            let mut source = source.borrow_mut();
            axes::select_axes(&mut source, x, y, &self.config.x_column, &self.config.y_column)?;
        }
        self.axes = Some((x.to_string(), y.to_string()));

        let mut evt = ScatterEvent::new(EventKind::AXES_CHANGED);
        evt.axes = Some(AxesMeta {
            x: x.to_string(),
            y: y.to_string(),
        });
        self.events.emit(evt);
        self.on_data_changed()
    }

    /// Replace the table behind the scatter source and rescale.
    ///
    /// The plotted columns are re-derived from the current X/Y choice.
    pub fn set_data<N, I>(&mut self, columns: I) -> Result<AutoscaleOutcome>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Value>)>,
    {
        {
            let source = self.source()?;
            let mut source = source.borrow_mut();
            source.replace_columns(columns)?;
            if let Some((x, y)) = &self.axes {
                axes::select_axes(&mut source, x, y, &self.config.x_column, &self.config.y_column)?;
            }
        }
        self.on_data_changed()
    }

    fn rescale(&mut self, trigger: EventKind) -> Result<AutoscaleOutcome> {
        let source = self.source()?;
        let source = source.borrow();
        let (x_range, y_range) = self
            .registry
            .range_pair_mut(&self.config.x_range_name, &self.config.y_range_name)?;
        let outcome = self.autoscale.apply(&source, x_range, y_range)?;

        let mut kinds = trigger;
        if outcome.moved {
            kinds |= EventKind::RANGE_CHANGED;
        }
        let mut evt = ScatterEvent::new(kinds);
        evt.range = Some(RangeMeta {
            x_range: bounds_of(outcome.x),
            y_range: bounds_of(outcome.y),
        });
        self.events.emit(evt);
        Ok(outcome)
    }

    /// Write the selection table (labels source) as CSV.
    pub fn export_table(&self, path: &Path) -> Result<usize> {
        let labels = self.labels()?;
        let labels = labels.borrow();
        export::save_table_csv(path, &labels, &self.config.table_columns)?;

        let rows = labels.row_count();
        let mut evt = ScatterEvent::new(EventKind::EXPORT);
        evt.export = Some(ExportMeta {
            path: path.display().to_string(),
            rows,
        });
        self.events.emit(evt);
        Ok(rows)
    }
}

fn selection_meta(source: &DataSource) -> SelectionMeta {
    SelectionMeta {
        source: source.name().to_string(),
        rows: source.selection().as_slice().to_vec(),
    }
}

fn bounds_of(update: AxisUpdate) -> Option<(f64, f64)> {
    match update {
        AxisUpdate::Updated { start, end } => Some((start, end)),
        AxisUpdate::Unchanged => None,
    }
}
