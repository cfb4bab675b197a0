use std::collections::HashSet;

/// Ordered, duplicate-free set of row indices.
///
/// Order is insertion order; inserting an index that is already present is a
/// no-op, so the first insertion decides its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
    seen: HashSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut sel = Self::new();
        sel.extend(indices);
        sel
    }

    /// Add `index`; returns `false` when it was already selected.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.seen.insert(index) {
            self.indices.push(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.seen.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Largest selected index, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.indices.iter().copied().max()
    }
}

impl Extend<usize> for Selection {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for i in iter {
            self.insert(i);
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insertion_keeps_its_position() {
        let sel = Selection::from_indices([3, 1, 3, 2, 1]);
        assert_eq!(sel.as_slice(), &[3, 1, 2]);
        assert_eq!(sel.len(), 3);
        assert!(sel.contains(2));
        assert!(!sel.contains(0));
    }

    #[test]
    fn clear_empties_both_views() {
        let mut sel: Selection = [0, 1].into_iter().collect();
        sel.clear();
        assert!(sel.is_empty());
        assert!(sel.insert(0));
        assert_eq!(sel.max_index(), Some(0));
    }
}
