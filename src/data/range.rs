use serde::{Deserialize, Serialize};

/// Linear or logarithmic axis mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

/// Visible interval of one plot axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRange {
    pub name: String,
    pub start: f64,
    pub end: f64,
    /// Hard limits for panning and zooming, if any.
    pub bounds: Option<(f64, f64)>,
    pub scale: AxisScale,
}

impl AxisRange {
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            bounds: None,
            scale: AxisScale::Linear,
        }
    }

    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bounds(mut self, bounds: (f64, f64)) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set both ends; returns `true` if either one moved.
    pub fn set(&mut self, start: f64, end: f64) -> bool {
        let changed = self.start != start || self.end != end;
        self.start = start;
        self.end = end;
        changed
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_change() {
        let mut r = AxisRange::new("x_range", 0.0, 1.0);
        assert!(!r.set(0.0, 1.0));
        assert!(r.set(-1.0, 1.0));
        assert_eq!((r.start, r.end), (-1.0, 1.0));
    }
}
