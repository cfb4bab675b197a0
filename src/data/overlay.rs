//! Plot decorations derived from the data: point labels, hover text,
//! diagonal guides and per-point colors.
//!
//! Everything here works in data coordinates; the panel maps the results to
//! plot space.

use serde::{Deserialize, Serialize};

use crate::data::range::AxisScale;
use crate::data::source::DataSource;
use crate::data::value::Value;
use crate::error::Result;

/// Background guides drawn behind the points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guides {
    /// Regular axis grid.
    Grid,
    /// The line y = x and two dashed lines one step above and below it.
    #[default]
    Diagonal,
}

/// Text drawn next to a selected point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Labels for every row of `labels` with a plottable position.
///
/// An empty labels source (nothing selected yet) has no columns at all and
/// yields no labels.
pub fn point_labels(
    labels: &DataSource,
    x_column: &str,
    y_column: &str,
    label_column: &str,
) -> Result<Vec<PointLabel>> {
    if labels.row_count() == 0 {
        return Ok(Vec::new());
    }
    let xs = labels.column(x_column)?;
    let ys = labels.column(y_column)?;
    let texts = labels.column(label_column)?;
    Ok(xs
        .iter()
        .zip(ys)
        .zip(texts)
        .filter_map(|((x, y), text)| {
            Some(PointLabel {
                x: x.as_number()?,
                y: y.as_number()?,
                text: text.to_string(),
            })
        })
        .collect())
}

/// Tooltip of one row: the label value, then one `column: value` line per
/// hover column. Columns the source lacks are skipped.
pub fn hover_text(
    source: &DataSource,
    row: usize,
    label_column: Option<&str>,
    hover_columns: &[String],
) -> String {
    let mut lines = Vec::with_capacity(hover_columns.len() + 1);
    if let Some(v) = label_column.and_then(|c| source.value(c, row)) {
        lines.push(v.to_string());
    }
    for c in hover_columns {
        if let Some(v) = source.value(c, row) {
            lines.push(format!("{c}: {v}"));
        }
    }
    lines.join("\n")
}

/// Straight guide line in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub dashed: bool,
}

/// The diagonal over `bounds` plus the lines offset by one step: +-1 on
/// linear axes, a decade on log axes.
pub fn diagonal_guides(bounds: (f64, f64), scale: AxisScale) -> [GuideLine; 3] {
    let (lo, hi) = bounds;
    let shift = |v: f64, up: bool| match (scale, up) {
        (AxisScale::Linear, true) => v + 1.0,
        (AxisScale::Linear, false) => v - 1.0,
        (AxisScale::Log, true) => v * 10.0,
        (AxisScale::Log, false) => v * 0.1,
    };
    [
        GuideLine {
            start: [lo, lo],
            end: [hi, hi],
            dashed: false,
        },
        GuideLine {
            start: [lo, shift(lo, true)],
            end: [hi, shift(hi, true)],
            dashed: true,
        },
        GuideLine {
            start: [lo, shift(lo, false)],
            end: [hi, shift(hi, false)],
            dashed: true,
        },
    ]
}

/// Parse a CSS-style color into unmultiplied RGBA.
///
/// Accepts `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)` with
/// `a` between 0 and 1.
pub fn parse_color(s: &str) -> Option<[u8; 4]> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return match hex.len() {
            6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
            8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
            _ => None,
        };
    }

    let (args, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return None;
    }
    let channel = |p: &str| p.parse::<u8>().ok();
    let alpha = if has_alpha {
        let a = parts[3].parse::<f64>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        (a * 255.0).round() as u8
    } else {
        255
    };
    Some([channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha])
}

/// Color of `row` from a color column, if the column exists and the cell
/// parses.
pub fn point_color(source: &DataSource, column: &str, row: usize) -> Option<[u8; 4]> {
    match source.value(column, row)? {
        Value::Text(s) => parse_color(s),
        _ => None,
    }
}

/// Row of the candidate closest to `target`, if within `max_dist`.
///
/// Distances are measured after dividing each axis by `scale`, so callers
/// pass the visible width and height to get a fraction of the view.
pub fn nearest_row(
    candidates: &[(usize, [f64; 2])],
    target: [f64; 2],
    scale: [f64; 2],
    max_dist: f64,
) -> Option<usize> {
    let norm = |d: f64, s: f64| if s > 0.0 { d / s } else { d };
    candidates
        .iter()
        .map(|(row, p)| {
            let dx = norm(p[0] - target[0], scale[0]);
            let dy = norm(p[1] - target[1], scale[1]);
            (*row, dx.hypot(dy))
        })
        .filter(|(_, d)| *d <= max_dist)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(row, _)| row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> DataSource {
        DataSource::from_columns(
            "labels_source",
            [
                ("alias", vec![Value::from("YAL001C"), Value::from("YBR010W")]),
                ("x", vec![Value::from(1.0), Value::from("NaN")]),
                ("y", vec![Value::from(2.0), Value::from(3.0)]),
                ("score", vec![Value::from(0.5), Value::Missing]),
                ("color", vec![Value::from("#ff000080"), Value::from("teal")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn labels_skip_rows_without_position() {
        let got = point_labels(&labels(), "x", "y", "alias").unwrap();
        assert_eq!(
            got,
            vec![PointLabel {
                x: 1.0,
                y: 2.0,
                text: "YAL001C".to_string()
            }]
        );
    }

    #[test]
    fn empty_labels_source_has_no_labels() {
        let empty = DataSource::new("labels_source");
        assert!(point_labels(&empty, "x", "y", "alias").unwrap().is_empty());
        assert!(point_labels(&labels(), "x", "y", "gene").is_err());
    }

    #[test]
    fn hover_lists_label_then_columns() {
        let cols = vec!["score".to_string(), "absent".to_string()];
        assert_eq!(hover_text(&labels(), 0, Some("alias"), &cols), "YAL001C\nscore: 0.5");
        assert_eq!(hover_text(&labels(), 1, None, &cols), "score: ");
    }

    #[test]
    fn diagonals_follow_the_axis_scale() {
        let [main, up, down] = diagonal_guides((-2.0, 8.0), AxisScale::Linear);
        assert_eq!((main.start, main.end, main.dashed), ([-2.0, -2.0], [8.0, 8.0], false));
        assert_eq!((up.start, up.end), ([-2.0, -1.0], [8.0, 9.0]));
        assert_eq!((down.start, down.end), ([-2.0, -3.0], [8.0, 7.0]));
        assert!(up.dashed && down.dashed);

        let [_, up, down] = diagonal_guides((0.1, 100.0), AxisScale::Log);
        assert_eq!(up.end, [100.0, 1000.0]);
        assert!((down.start[1] - 0.01).abs() < 1e-12);
    }

    #[test]
    fn parses_css_colors() {
        assert_eq!(parse_color("#1f77b4"), Some([0x1f, 0x77, 0xb4, 255]));
        assert_eq!(parse_color("rgba(0, 0, 0, 0.5)"), Some([0, 0, 0, 128]));
        assert_eq!(parse_color(" rgb(10,20,30) "), Some([10, 20, 30, 255]));
        assert_eq!(parse_color("rgba(0, 0, 0, 2)"), None);
        assert_eq!(parse_color("rgb(0, 0)"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("teal"), None);
    }

    #[test]
    fn point_color_reads_the_color_column() {
        let src = labels();
        assert_eq!(point_color(&src, "color", 0), Some([255, 0, 0, 128]));
        assert_eq!(point_color(&src, "color", 1), None);
        assert_eq!(point_color(&src, "colour", 0), None);
    }

    #[test]
    fn nearest_row_respects_distance_limit() {
        let pts = [(0, [0.0, 0.0]), (4, [10.0, 100.0]), (7, [9.0, 90.0])];
        assert_eq!(nearest_row(&pts, [9.8, 99.0], [10.0, 100.0], 0.05), Some(4));
        assert_eq!(nearest_row(&pts, [5.0, 50.0], [10.0, 100.0], 0.05), None);
        assert_eq!(nearest_row(&[], [0.0, 0.0], [1.0, 1.0], 1.0), None);
    }
}
