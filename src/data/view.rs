//! Initial view limits computed when a scatter view is first built.

use crate::data::range::{AxisRange, AxisScale};
use crate::data::source::DataSource;
use crate::error::Result;

/// Linear padding of the initial view, as a fraction of the data extent.
pub const INITIAL_OVERHANG: f64 = 0.05;
/// Linear padding of the hard bounds, as a fraction of the data extent.
pub const BOUNDS_OVERHANG: f64 = 0.5;

/// Initial visible interval and hard pan/zoom bounds shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub initial: (f64, f64),
    pub bounds: (f64, f64),
}

impl ViewLimits {
    /// Axis range starting at the initial view, limited to the bounds.
    pub fn to_range(&self, name: impl Into<String>, scale: AxisScale) -> AxisRange {
        AxisRange::new(name, self.initial.0, self.initial.1)
            .with_bounds(self.bounds)
            .with_scale(scale)
    }
}

/// Compute view limits over every value of `columns`.
///
/// Both axes share the limits so that the diagonal stays a diagonal. Linear
/// axes pad the overall extent; log axes only consider positive values and
/// widen by decades. Returns `Ok(None)` when no usable value exists.
pub fn initial_view(
    source: &DataSource,
    columns: &[String],
    scale: AxisScale,
) -> Result<Option<ViewLimits>> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for name in columns {
        for v in source.column(name)?.iter().filter_map(|v| v.as_number()) {
            if !v.is_finite() || (scale == AxisScale::Log && v <= 0.0) {
                continue;
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        return Ok(None);
    }
    let limits = match scale {
        AxisScale::Linear => {
            let extent = hi - lo;
            let overhang = extent * INITIAL_OVERHANG;
            let max_overhang = extent * BOUNDS_OVERHANG;
            ViewLimits {
                initial: (lo - overhang, hi + overhang),
                bounds: (lo - max_overhang, hi + max_overhang),
            }
        }
        AxisScale::Log => ViewLimits {
            initial: (lo * 0.1, hi * 10.0),
            bounds: (lo * 0.001, hi * 1000.0),
        },
    };
    Ok(Some(limits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::Value;

    fn src() -> DataSource {
        DataSource::from_columns(
            "scatter_source",
            [
                ("a", vec![Value::from(0.0), Value::from(10.0), Value::Missing]),
                ("b", vec![Value::from(5.0), Value::from(20.0), Value::from(1.0)]),
            ],
        )
        .unwrap()
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn linear_view_pads_overall_extent() {
        let cols = vec!["a".to_string(), "b".to_string()];
        let v = initial_view(&src(), &cols, AxisScale::Linear).unwrap().unwrap();
        assert!(close(v.initial, (-1.0, 21.0)));
        assert!(close(v.bounds, (-10.0, 30.0)));
    }

    #[test]
    fn log_view_ignores_non_positive_values() {
        let cols = vec!["a".to_string(), "b".to_string()];
        let v = initial_view(&src(), &cols, AxisScale::Log).unwrap().unwrap();
        assert!(close(v.initial, (0.1, 200.0)));
        assert!(close(v.bounds, (0.001, 20000.0)));
    }

    #[test]
    fn no_values_means_no_view() {
        let s = DataSource::from_columns("s", [("a", vec![Value::Missing])]).unwrap();
        assert_eq!(initial_view(&s, &["a".to_string()], AxisScale::Linear).unwrap(), None);
    }
}
