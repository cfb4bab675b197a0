//! Subset menu: select the rows flagged in a boolean column.

use crate::data::selection::Selection;
use crate::data::source::DataSource;
use crate::data::value::ColumnKind;
use crate::error::Result;

/// Rows of `source` whose value in `column` is `true`, in row order.
///
/// The empty column name stands for the blank menu entry and selects nothing.
pub fn subset_rows(source: &DataSource, column: &str) -> Result<Selection> {
    if column.is_empty() {
        return Ok(Selection::new());
    }
    let values = source.column(column)?;
    Ok(values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.as_bool() == Some(true))
        .map(|(row, _)| row)
        .collect())
}

/// Replace the selection of `source` with [`subset_rows`] and notify listeners.
pub fn select_subset(source: &mut DataSource, column: &str) -> Result<usize> {
    let selection = subset_rows(source, column)?;
    let count = selection.len();
    source.select(selection)?;
    tracing::debug!(source = source.name(), column, count, "subset updated selection");
    Ok(count)
}

/// Menu entries: the blank entry followed by every boolean column.
pub fn subset_options(source: &DataSource) -> Vec<String> {
    std::iter::once(String::new())
        .chain(source.columns_of_kind(ColumnKind::Boolean))
        .collect()
}
