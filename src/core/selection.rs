//! # Compare Selection
//!
//! Bounded, ordered set of record ids picked for side-by-side comparison.

/// Most tools that can be compared at once.
pub const COMPARE_CAPACITY: usize = 3;

/// Selection size at which the comparison view opens.
pub const COMPARE_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Added,
    Removed,
    /// Set already full; nothing changed.
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: u32) -> SelectionOutcome {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            return SelectionOutcome::Removed;
        }
        if self.ids.len() >= COMPARE_CAPACITY {
            return SelectionOutcome::Rejected;
        }
        self.ids.push(id);
        SelectionOutcome::Added
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in the order they were picked.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ready_to_compare(&self) -> bool {
        self.ids.len() >= COMPARE_THRESHOLD
    }
}
