// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Element orders of a group table.
//!
//! The isomorphism search uses these as a cheap invariant: a relabeling can
//! only be an isomorphism if it maps every element to one of the same order.

use super::{CayleyTable, Element};
use crate::error::AlgebraError;

/// Per-element powers count for a group table.
///
/// For each element `g` the index stores the number of non-identity powers
/// `g, g², …` seen before returning to the identity. The identity stores 0
/// and an element of cyclic order `m` stores `m - 1`; [`cyclic_order`]
/// reports `m`.
///
/// [`cyclic_order`]: ElementOrders::cyclic_order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementOrders {
    steps: Vec<usize>,
}

impl ElementOrders {
    /// Compute the index for a table that the caller believes is a group.
    ///
    /// Fails with [`AlgebraError::StructuralCorruption`] when some element
    /// never returns to the identity within `order` steps, or when the
    /// identity itself does not have order zero.
    pub fn compute(table: &CayleyTable) -> Result<Self, AlgebraError> {
        let n = table.order();
        let mut steps = Vec::with_capacity(n);
        for g in 0..n {
            let mut count = 0;
            let mut power = table.get(g, 0);
            while power != 0 {
                count += 1;
                if count > n {
                    return Err(AlgebraError::StructuralCorruption(format!(
                        "powers of element {} never reach the identity",
                        g
                    )));
                }
                power = table.get(g, power);
            }
            steps.push(count);
        }
        if steps[0] != 0 {
            return Err(AlgebraError::StructuralCorruption(
                "the identity does not have order zero".to_string(),
            ));
        }
        Ok(Self { steps })
    }

    /// Non-identity powers of `g` before the identity recurs.
    #[inline]
    pub fn steps(&self, g: Element) -> usize {
        self.steps[g]
    }

    /// Smallest `m > 0` with `g^m` equal to the identity.
    pub fn cyclic_order(&self, g: Element) -> usize {
        self.steps[g] + 1
    }

    /// Number of elements indexed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for an index built from a table.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
