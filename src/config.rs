//! Configuration of a scatter view: model names, plotted columns and
//! callback parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::callbacks::autoscale::DEFAULT_PADDING;
use crate::data::overlay::Guides;
use crate::data::range::AxisScale;
use crate::error::{Error, Result};

/// Names and parameters wiring the callbacks to their models.
///
/// Every field has a default, so a config file only lists what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Window title of the standalone viewer.
    pub title: String,
    pub source_name: String,
    /// Source mirroring the selected rows (labels and table).
    pub labels_source_name: String,
    pub x_range_name: String,
    pub y_range_name: String,
    /// Plotted coordinate columns.
    pub x_column: String,
    pub y_column: String,
    /// Columns the search box scans. `None`: every text column.
    pub search_columns: Option<Vec<String>>,
    /// Columns shown in the selection table and written on export. Empty:
    /// every column of the labels source.
    pub table_columns: Vec<String>,
    /// Column whose text labels the selected points and heads the tooltip.
    /// `None`: the first text column of the table.
    pub label_column: Option<String>,
    /// Extra columns listed in the point tooltip.
    pub hover_columns: Vec<String>,
    /// Start with the selected points labelled.
    pub show_labels: bool,
    pub guides: Guides,
    /// Per-point CSS colors (`#rrggbb`, `rgba(...)`); used when present.
    pub color_column: String,
    /// Fraction of the data span added on each side when autoscaling.
    pub padding: f64,
    pub scale: AxisScale,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            title: "Scatter".to_string(),
            source_name: "scatter_source".to_string(),
            labels_source_name: "labels_source".to_string(),
            x_range_name: "x_range".to_string(),
            y_range_name: "y_range".to_string(),
            x_column: "x".to_string(),
            y_column: "y".to_string(),
            search_columns: None,
            table_columns: Vec::new(),
            label_column: None,
            hover_columns: Vec::new(),
            show_labels: true,
            guides: Guides::Diagonal,
            color_column: "color".to_string(),
            padding: DEFAULT_PADDING,
            scale: AxisScale::Linear,
        }
    }
}

impl ScatterConfig {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load a configuration file; `.yaml`/`.yml` files are YAML, anything else JSON.
pub fn load_config_from_path(path: &Path) -> Result<ScatterConfig> {
    let txt = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let cfg = if is_yaml(path) {
        ScatterConfig::from_yaml(&txt)?
    } else {
        ScatterConfig::from_json(&txt)?
    };
    tracing::debug!(path = %path.display(), "loaded scatter config");
    Ok(cfg)
}

/// Save a configuration file in the format implied by its extension.
pub fn save_config_to_path(cfg: &ScatterConfig, path: &Path) -> Result<()> {
    let txt = if is_yaml(path) { cfg.to_yaml()? } else { cfg.to_json()? };
    std::fs::write(path, txt).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = ScatterConfig::from_json(r#"{ "padding": 0.1, "scale": "log" }"#).unwrap();
        assert_eq!(cfg.padding, 0.1);
        assert_eq!(cfg.scale, AxisScale::Log);
        assert_eq!(cfg.source_name, "scatter_source");
        assert_eq!(cfg.search_columns, None);
    }

    #[test]
    fn yaml_lists_search_columns() {
        let cfg = ScatterConfig::from_yaml("search_columns: [alias, description]\n").unwrap();
        assert_eq!(
            cfg.search_columns,
            Some(vec!["alias".to_string(), "description".to_string()])
        );
    }

    #[test]
    fn plot_decorations_default_to_diagonal_and_labels() {
        let cfg = ScatterConfig::default();
        assert_eq!(cfg.guides, Guides::Diagonal);
        assert!(cfg.show_labels);
        assert_eq!(cfg.color_column, "color");

        let cfg = ScatterConfig::from_yaml(
            "guides: grid\nshow_labels: false\nhover_columns: [description]\n",
        )
        .unwrap();
        assert_eq!(cfg.guides, Guides::Grid);
        assert!(!cfg.show_labels);
        assert_eq!(cfg.hover_columns, vec!["description".to_string()]);
        assert_eq!(cfg.label_column, None);
    }

    #[test]
    fn malformed_input_is_a_config_error() {
        assert!(matches!(
            ScatterConfig::from_json("{ padding: }"),
            Err(Error::Config(_))
        ));
    }
}
