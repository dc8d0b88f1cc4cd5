// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for search slots.
//!
//! Every assignment to a search slot records the slot's old value. When the
//! engine backtracks it rewinds the trail to a checkpoint, writing the old
//! values back, so predicates always see the state they saw before the
//! choice being undone.

/// A single entry in the trail, recording one slot assignment.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    /// Index of the slot that changed.
    slot: usize,
    /// Value of the slot before the change.
    old_value: usize,
}

/// Undo log for the slots of a [`SearchContext`](crate::context::SearchContext).
///
/// A checkpoint is just the trail length at some moment; rewinding to it
/// undoes every assignment recorded since, newest first.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Trail entries beyond this indicate a runaway search.
    const MAX_SIZE: usize = 1 << 20;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
        }
    }

    /// Set `slots[slot]` to `value`, remembering the previous value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds `MAX_SIZE` entries.
    pub(crate) fn record_and_set(&mut self, slots: &mut [usize], slot: usize, value: usize) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry {
            slot,
            old_value: slots[slot],
        });
        slots[slot] = value;
    }

    /// Undo every assignment recorded after `checkpoint`.
    pub(crate) fn rewind_to(&mut self, checkpoint: usize, slots: &mut [usize]) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                slots[entry.slot] = entry.old_value;
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
