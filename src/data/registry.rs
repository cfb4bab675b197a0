//! Named models shared between widgets of one scatter view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::data::range::AxisRange;
use crate::data::source::DataSource;
use crate::error::{Error, Result};

/// Data source shared between the registry and the listeners that feed it.
///
/// Listeners of one source may borrow other sources, never the source that
/// is notifying them.
pub type SharedSource = Rc<RefCell<DataSource>>;

/// Registry of data sources and axis ranges by name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    sources: HashMap<String, SharedSource>,
    ranges: HashMap<String, AxisRange>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under its own name, replacing any previous one.
    pub fn add_source(&mut self, source: DataSource) -> SharedSource {
        let shared = Rc::new(RefCell::new(source));
        self.add_shared_source(shared.clone());
        shared
    }

    pub fn add_shared_source(&mut self, source: SharedSource) {
        let name = source.borrow().name().to_string();
        self.sources.insert(name, source);
    }

    /// Register a range under its own name, replacing any previous one.
    pub fn add_range(&mut self, range: AxisRange) {
        self.ranges.insert(range.name.clone(), range);
    }

    pub fn source(&self, name: &str) -> Result<SharedSource> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| Error::missing_model(name))
    }

    pub fn range(&self, name: &str) -> Result<&AxisRange> {
        self.ranges.get(name).ok_or_else(|| Error::missing_model(name))
    }

    pub fn range_mut(&mut self, name: &str) -> Result<&mut AxisRange> {
        self.ranges
            .get_mut(name)
            .ok_or_else(|| Error::missing_model(name))
    }

    /// Mutable access to two distinct ranges at once (x and y).
    pub fn range_pair_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<(&mut AxisRange, &mut AxisRange)> {
        if first == second {
            return Err(Error::Config(format!(
                "range '{first}' cannot drive both axes"
            )));
        }
        let mut a = None;
        let mut b = None;
        for (name, range) in self.ranges.iter_mut() {
            if name == first {
                a = Some(range);
            } else if name == second {
                b = Some(range);
            }
        }
        match (a, b) {
            (Some(a), Some(b)) => Ok((a, b)),
            (None, _) => Err(Error::missing_model(first)),
            (_, None) => Err(Error::missing_model(second)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name) || self.ranges.contains_key(name)
    }

    /// Fail unless every name resolves to a source or a range.
    pub fn require(&self, names: &[&str]) -> Result<()> {
        match names.iter().find(|n| !self.contains(n)) {
            Some(missing) => Err(Error::missing_model(*missing)),
            None => Ok(()),
        }
    }
}
