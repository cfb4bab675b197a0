//! Copy the selected rows into a second source (point labels, selection table).

use crate::data::registry::SharedSource;
use crate::data::selection::Selection;
use crate::data::source::{DataSource, SelectionListener};
use crate::data::value::Value;

/// Selection listener that mirrors the selected rows of the source it is
/// attached to into `target`.
pub struct SelectionMirror {
    target: SharedSource,
    columns: Vec<String>,
}

impl SelectionMirror {
    /// Mirror `columns` into `target`. Columns the notifying source lacks are
    /// skipped with a warning.
    pub fn new<I, S>(target: SharedSource, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl SelectionListener for SelectionMirror {
    fn on_selection_changed(&mut self, source: &DataSource) {
        let rows = source.selection();
        let mut mirrored: Vec<(String, Vec<Value>)> = Vec::with_capacity(self.columns.len());
        for name in &self.columns {
            match source.column(name) {
                Ok(values) => {
                    let picked = rows.iter().map(|r| values[r].clone()).collect();
                    mirrored.push((name.clone(), picked));
                }
                Err(e) => tracing::warn!(error = %e, "selection mirror skipped a column"),
            }
        }

        let mut target = self.target.borrow_mut();
        // columns are equally long by construction
        if let Err(e) = target.replace_columns(mirrored) {
            tracing::warn!(error = %e, labels = target.name(), "selection mirror failed");
        }
        let _ = target.set_selection(Selection::new());
        tracing::debug!(labels = target.name(), rows = rows.len(), "mirrored selection");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn mirrors_selected_rows() {
        let labels = Rc::new(RefCell::new(DataSource::new("labels_source")));
        let mut src = DataSource::from_columns(
            "scatter_source",
            [
                ("alias", vec![Value::from("a"), Value::from("b"), Value::from("c")]),
                ("x", vec![Value::from(1.0), Value::from(2.0), Value::from(3.0)]),
            ],
        )
        .unwrap();
        src.add_listener(SelectionMirror::new(labels.clone(), ["alias", "x", "absent"]));

        src.select(Selection::from_indices([2, 0])).unwrap();
        let labels = labels.borrow();
        assert_eq!(labels.column_names(), &["alias", "x"]);
        assert_eq!(
            labels.column("alias").unwrap(),
            &[Value::from("c"), Value::from("a")]
        );
        assert_eq!(labels.row_count(), 2);
    }

    #[test]
    fn empty_selection_empties_target() {
        let labels = Rc::new(RefCell::new(DataSource::new("labels_source")));
        let mut src =
            DataSource::from_columns("scatter_source", [("x", vec![Value::from(1.0)])]).unwrap();
        src.add_listener(SelectionMirror::new(labels.clone(), ["x"]));
        src.select(Selection::from_indices([0])).unwrap();
        src.select(Selection::new()).unwrap();
        assert_eq!(labels.borrow().row_count(), 0);
    }
}
