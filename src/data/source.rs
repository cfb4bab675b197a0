//! Column-oriented data source backing a scatter plot.

use std::collections::HashMap;
use std::fmt;

use crate::data::selection::Selection;
use crate::data::value::{ColumnKind, Value};
use crate::error::{Error, Result};

/// Observer notified after the selection of a [`DataSource`] changed.
///
/// Listeners are called synchronously with the source whose selection was
/// replaced. They cannot fail; anything they need to report goes to the log.
pub trait SelectionListener {
    fn on_selection_changed(&mut self, source: &DataSource);
}

impl<F> SelectionListener for F
where
    F: FnMut(&DataSource),
{
    fn on_selection_changed(&mut self, source: &DataSource) {
        self(source)
    }
}

/// Named set of equally long, row-aligned columns plus the current selection.
pub struct DataSource {
    name: String,
    columns: HashMap<String, Vec<Value>>,
    column_order: Vec<String>,
    selection: Selection,
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl DataSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: HashMap::new(),
            column_order: Vec::new(),
            selection: Selection::new(),
            listeners: Vec::new(),
        }
    }

    /// Build a source from `(column, values)` pairs, keeping their order.
    pub fn from_columns<N, I>(name: impl Into<String>, columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Value>)>,
    {
        let mut source = Self::new(name);
        for (col, values) in columns {
            source.insert_column(col, values)?;
        }
        Ok(source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn row_count(&self) -> usize {
        self.column_order
            .first()
            .and_then(|c| self.columns.get(c))
            .map_or(0, Vec::len)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::missing_column(&self.name, name))
    }

    pub fn value(&self, column: &str, row: usize) -> Option<&Value> {
        self.columns.get(column).and_then(|c| c.get(row))
    }

    /// Names of all columns of the given kind, in column order.
    pub fn columns_of_kind(&self, kind: ColumnKind) -> Vec<String> {
        self.column_order
            .iter()
            .filter(|c| ColumnKind::of(&self.columns[c.as_str()]) == kind)
            .cloned()
            .collect()
    }

    /// Insert or replace a column.
    ///
    /// The column must have as many rows as the other columns. Replacing the
    /// only column may change the row count; a selection that no longer fits
    /// is dropped.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        let others = self
            .column_order
            .iter()
            .find(|c| **c != name)
            .map(|c| self.columns[c.as_str()].len());
        if let Some(expected) = others {
            if values.len() != expected {
                return Err(Error::ColumnLength {
                    source_name: self.name.clone(),
                    column: name,
                    expected,
                    actual: values.len(),
                });
            }
        }
        if !self.columns.contains_key(&name) {
            self.column_order.push(name.clone());
        }
        self.columns.insert(name, values);
        self.drop_stale_selection();
        Ok(())
    }

    /// Replace all columns at once.
    ///
    /// Validated up front: on a length mismatch the source is left untouched.
    pub fn replace_columns<N, I>(&mut self, columns: I) -> Result<()>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Value>)>,
    {
        let mut fresh = DataSource::new(self.name.clone());
        for (col, values) in columns {
            fresh.insert_column(col, values)?;
        }
        self.columns = fresh.columns;
        self.column_order = fresh.column_order;
        self.drop_stale_selection();
        Ok(())
    }

    pub fn remove_column(&mut self, name: &str) -> Option<Vec<Value>> {
        let values = self.columns.remove(name)?;
        self.column_order.retain(|c| c != name);
        self.drop_stale_selection();
        Some(values)
    }

    /// Remove every column and the selection.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.column_order.clear();
        self.selection.clear();
    }

    fn drop_stale_selection(&mut self) {
        let rows = self.row_count();
        if self.selection.max_index().is_some_and(|m| m >= rows) {
            tracing::debug!(source = %self.name, rows, "dropping selection past the last row");
            self.selection.clear();
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the selection without notifying listeners.
    pub fn set_selection(&mut self, selection: Selection) -> Result<()> {
        let rows = self.row_count();
        if let Some(index) = selection.max_index().filter(|m| *m >= rows) {
            return Err(Error::SelectionOutOfRange {
                source_name: self.name.clone(),
                index,
                rows,
            });
        }
        self.selection = selection;
        Ok(())
    }

    /// Replace the selection and notify listeners.
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        self.set_selection(selection)?;
        self.notify_selection_changed();
        Ok(())
    }

    /// Call every registered listener with this source, in registration order.
    pub fn notify_selection_changed(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener.on_selection_changed(self);
        }
        // keep listeners registered by a listener during notification
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }

    pub fn add_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("name", &self.name)
            .field("columns", &self.column_order)
            .field("rows", &self.row_count())
            .field("selection", &self.selection.as_slice())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
