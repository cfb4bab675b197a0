//! Search box: select the rows whose text contains the query.

use crate::data::selection::Selection;
use crate::data::source::DataSource;
use crate::data::value::ColumnKind;
use crate::error::Result;

/// Case-insensitive substring search over a fixed list of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    columns: Vec<String>,
}

impl SearchFilter {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Search every text column of `source`.
    pub fn for_text_columns(source: &DataSource) -> Self {
        Self::new(source.columns_of_kind(ColumnKind::Text))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows matching `query`, without touching the source.
    ///
    /// The empty query matches nothing. Columns are scanned in configured
    /// order and a row keeps the position of its first match. Every configured
    /// column must exist, whatever the query.
    pub fn matching_rows(&self, source: &DataSource, query: &str) -> Result<Selection> {
        let columns = self
            .columns
            .iter()
            .map(|c| source.column(c))
            .collect::<Result<Vec<_>>>()?;

        let query = query.to_lowercase();
        let mut selection = Selection::new();
        if query.is_empty() {
            return Ok(selection);
        }
        for values in columns {
            for (row, value) in values.iter().enumerate() {
                if selection.contains(row) {
                    continue;
                }
                if value.search_text().to_lowercase().contains(&query) {
                    selection.insert(row);
                }
            }
        }
        Ok(selection)
    }

    /// Replace the selection of `source` with the rows matching `query` and
    /// notify its listeners. Returns the number of selected rows.
    pub fn apply(&self, source: &mut DataSource, query: &str) -> Result<usize> {
        let selection = self.matching_rows(source, query)?;
        let count = selection.len();
        source.select(selection)?;
        tracing::debug!(source = source.name(), query, count, "search updated selection");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::Value;
    use crate::error::Error;

    fn fruit() -> DataSource {
        DataSource::from_columns(
            "scatter_source",
            [
                (
                    "name",
                    vec![Value::from("Apple"), Value::from("apple pie"), Value::from("Banana")],
                ),
                (
                    "note",
                    vec![Value::from("red"), Value::from("baked"), Value::from("Snapple")],
                ),
                ("score", vec![Value::from(12.0), Value::from(3.5), Value::Missing]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn matches_case_insensitively() {
        let f = SearchFilter::new(["name"]);
        let sel = f.matching_rows(&fruit(), "APP").unwrap();
        assert_eq!(sel.as_slice(), &[0, 1]);
    }

    #[test]
    fn empty_query_selects_nothing() {
        let mut src = fruit();
        src.set_selection(Selection::from_indices([0, 1, 2])).unwrap();
        let f = SearchFilter::new(["name", "note"]);
        assert_eq!(f.apply(&mut src, "").unwrap(), 0);
        assert!(src.selection().is_empty());
    }

    #[test]
    fn rows_matching_in_several_columns_appear_once() {
        let f = SearchFilter::new(["note", "name"]);
        let sel = f.matching_rows(&fruit(), "app").unwrap();
        assert_eq!(sel.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn numbers_are_searchable_as_text() {
        let f = SearchFilter::new(["score"]);
        assert_eq!(f.matching_rows(&fruit(), "3.5").unwrap().as_slice(), &[1]);
        assert_eq!(f.matching_rows(&fruit(), "12").unwrap().as_slice(), &[0]);
    }

    #[test]
    fn unknown_column_fails_before_mutation() {
        let mut src = fruit();
        src.set_selection(Selection::from_indices([2])).unwrap();
        let f = SearchFilter::new(["name", "colour"]);
        let err = f.apply(&mut src, "").unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "colour"));
        assert_eq!(src.selection().as_slice(), &[2]);
    }

    #[test]
    fn defaults_to_text_columns() {
        let f = SearchFilter::for_text_columns(&fruit());
        assert_eq!(f.columns(), &["name", "note"]);
    }
}
