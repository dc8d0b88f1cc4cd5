// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: the mutable state a search threads through its predicates.
//!
//! The immutable inputs of a search (tables, element orders, inverses) are
//! owned or borrowed by the predicates themselves. What changes during the
//! search lives here:
//! - `slots`: the values chosen so far, one per choice point (table cells for
//!   enumeration, images of elements for relabeling searches)
//! - `trail`: the undo log that restores `slots` on backtracking
//! - `statistics`: counters bumped by predicates
//!
//! Each search owns its own context, so independent searches share nothing
//! and can run on separate threads.

use crate::algebra::Element;
use crate::state::statistics::Statistics;
use crate::trail::Trail;

/// Mutable state of one search.
#[derive(Debug)]
pub struct SearchContext {
    /// Undo log for `slots`.
    pub trail: Trail,
    /// Counters for the search.
    pub statistics: Statistics,
    slots: Vec<Element>,
}

impl SearchContext {
    /// Create a context with `size` slots, all initially 0.
    pub fn new(size: usize) -> Self {
        Self {
            trail: Trail::new(),
            statistics: Statistics::new(),
            slots: vec![0; size],
        }
    }

    /// Assign a slot, recording the old value on the trail.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn assign(&mut self, slot: usize, value: Element) {
        self.trail.record_and_set(&mut self.slots, slot, value);
    }

    /// Undo every assignment made since the trail had length `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.slots);
    }

    /// Current value of a slot.
    #[inline]
    pub fn slot(&self, slot: usize) -> Element {
        self.slots[slot]
    }

    /// All slots.
    pub fn slots(&self) -> &[Element] {
        &self.slots
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(0)
    }
}
