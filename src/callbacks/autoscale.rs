//! Fit the axis ranges to the plotted points.

use crate::data::range::{AxisRange, AxisScale};
use crate::data::source::DataSource;
use crate::error::Result;

/// Fraction of the data span added on each side of an axis.
pub const DEFAULT_PADDING: f64 = 0.05;

/// Smallest and largest plotted value on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    fn single(v: f64) -> Self {
        Self { min: v, max: v }
    }

    fn include(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    fn extend(extent: &mut Option<Extent>, v: f64) {
        match extent {
            Some(e) => e.include(v),
            None => *extent = Some(Extent::single(v)),
        }
    }

    /// `(start, end)` with `padding` of the span added on both sides.
    ///
    /// Log axes pad in decades: the ratio `max / min` plays the role of the
    /// span.
    pub fn padded(&self, padding: f64, scale: AxisScale) -> (f64, f64) {
        match scale {
            AxisScale::Linear => {
                let buffer = (self.max - self.min) * padding;
                (self.min - buffer, self.max + buffer)
            }
            AxisScale::Log => {
                let factor = (self.max / self.min).powf(padding);
                (self.min / factor, self.max * factor)
            }
        }
    }
}

/// What happened to one axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisUpdate {
    Updated { start: f64, end: f64 },
    /// No row had a plottable value; the range was left as it was.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoscaleOutcome {
    pub x: AxisUpdate,
    pub y: AxisUpdate,
    /// Whether either range actually moved.
    pub moved: bool,
}

/// Recomputes x/y ranges from two coordinate columns of a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeAutoscale {
    pub x_column: String,
    pub y_column: String,
    pub padding: f64,
}

impl Default for RangeAutoscale {
    fn default() -> Self {
        Self {
            x_column: "x".to_string(),
            y_column: "y".to_string(),
            padding: DEFAULT_PADDING,
        }
    }
}

impl RangeAutoscale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_column = x.into();
        self.y_column = y.into();
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Extents of the rows where both coordinates can be plotted.
    ///
    /// A row counts for both axes or for neither: a missing, NaN or infinite
    /// value in either column drops it, as does a non-positive value on a log
    /// axis.
    pub fn extents(
        &self,
        source: &DataSource,
        x_scale: AxisScale,
        y_scale: AxisScale,
    ) -> Result<(Option<Extent>, Option<Extent>)> {
        let xs = source.column(&self.x_column)?;
        let ys = source.column(&self.y_column)?;
        let plottable = |v: f64, scale: AxisScale| {
            v.is_finite() && (scale == AxisScale::Linear || v > 0.0)
        };

        let mut x_extent: Option<Extent> = None;
        let mut y_extent: Option<Extent> = None;
        for (xv, yv) in xs.iter().zip(ys) {
            let (Some(x), Some(y)) = (xv.as_number(), yv.as_number()) else {
                continue;
            };
            if !plottable(x, x_scale) || !plottable(y, y_scale) {
                continue;
            }
            Extent::extend(&mut x_extent, x);
            Extent::extend(&mut y_extent, y);
        }
        Ok((x_extent, y_extent))
    }

    /// Fit `x_range` and `y_range` to the data of `source`.
    ///
    /// Both columns are resolved before either range is touched. An axis
    /// without any plottable row keeps its current range.
    pub fn apply(
        &self,
        source: &DataSource,
        x_range: &mut AxisRange,
        y_range: &mut AxisRange,
    ) -> Result<AutoscaleOutcome> {
        let (x_extent, y_extent) = self.extents(source, x_range.scale, y_range.scale)?;
        let mut moved = false;
        let x = self.fit(x_extent, x_range, &mut moved);
        let y = self.fit(y_extent, y_range, &mut moved);
        Ok(AutoscaleOutcome { x, y, moved })
    }

    fn fit(&self, extent: Option<Extent>, range: &mut AxisRange, moved: &mut bool) -> AxisUpdate {
        match extent {
            Some(e) => {
                let (start, end) = e.padded(self.padding, range.scale);
                *moved |= range.set(start, end);
                tracing::debug!(range = %range.name, start, end, "autoscaled range");
                AxisUpdate::Updated { start, end }
            }
            None => {
                tracing::debug!(range = %range.name, "no plottable rows, range left unchanged");
                AxisUpdate::Unchanged
            }
        }
    }
}
