//! X/Y menus: choose which columns are plotted.

use crate::data::source::DataSource;
use crate::data::value::ColumnKind;
use crate::error::Result;

/// Copy `x_name` and `y_name` into the plotted `x_column`/`y_column`.
///
/// Both source columns are resolved first; on error nothing changes. The
/// caller is expected to treat this as a data change (and rescale).
pub fn select_axes(
    source: &mut DataSource,
    x_name: &str,
    y_name: &str,
    x_column: &str,
    y_column: &str,
) -> Result<()> {
    let xs = source.column(x_name)?.to_vec();
    let ys = source.column(y_name)?.to_vec();
    source.insert_column(x_column, xs)?;
    source.insert_column(y_column, ys)?;
    tracing::debug!(source = source.name(), x = x_name, y = y_name, "plotted columns changed");
    Ok(())
}

/// Columns offered in the X/Y menus: every numeric column except the plotted
/// ones themselves.
pub fn axis_options(source: &DataSource, x_column: &str, y_column: &str) -> Vec<String> {
    source
        .columns_of_kind(ColumnKind::Numeric)
        .into_iter()
        .filter(|c| c != x_column && c != y_column)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::Value;

    fn expression() -> DataSource {
        DataSource::from_columns(
            "scatter_source",
            [
                ("wt", vec![Value::from(1.0), Value::from(2.0)]),
                ("mut", vec![Value::from(3.0), Value::from(4.0)]),
                ("gene", vec![Value::from("a"), Value::from("b")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn copies_chosen_columns() {
        let mut src = expression();
        select_axes(&mut src, "wt", "mut", "x", "y").unwrap();
        assert_eq!(src.column("x").unwrap(), src.column("wt").unwrap());
        assert_eq!(src.column("y").unwrap(), src.column("mut").unwrap());
        assert_eq!(axis_options(&src, "x", "y"), vec!["wt".to_string(), "mut".to_string()]);
    }

    #[test]
    fn unknown_column_changes_nothing() {
        let mut src = expression();
        assert!(select_axes(&mut src, "wt", "nope", "x", "y").is_err());
        assert!(!src.has_column("x"));
    }
}
