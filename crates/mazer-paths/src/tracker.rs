//! Row-grouped visited set.

use std::collections::{BTreeSet, HashMap};

use mazer_core::Coord;

/// Set of coordinates touched by one search direction, grouped by row.
///
/// Coordinates are only ever added; a fresh tracker is created per search
/// (per direction for bidirectional search).
#[derive(Debug, Clone, Default)]
pub struct VisitedTracker {
    rows: HashMap<i32, BTreeSet<i32>>,
    len: usize,
}

impl VisitedTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `c` has been added.
    #[inline]
    pub fn has(&self, c: Coord) -> bool {
        self.rows.get(&c.row).is_some_and(|cols| cols.contains(&c.col))
    }

    /// Add `c`. Returns `true` if it was not already present.
    pub fn add(&mut self, c: Coord) -> bool {
        let inserted = self.rows.entry(c.row).or_default().insert(c.col);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Number of distinct coordinates added.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
