// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Checks on a complete relabeling.
//!
//! These run after [`PermutationPredicate`](super::PermutationPredicate) or
//! [`CombinationPredicate`](super::CombinationPredicate) has filled every
//! slot. The mapping they test sends `0` to `0` and element `i > 0` to slot
//! `i - 1`.

use log::trace;

use crate::algebra::{CayleyTable, Element};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

fn image(slots: &[Element], i: Element) -> Element {
    if i == 0 {
        0
    } else {
        slots[i - 1]
    }
}

/// Checks that the mapping preserves the product:
/// `target[π(i)][π(j)] == π(source[i][j])`.
///
/// For an isomorphism every pair is checked. For an embedding the identity
/// row and column are skipped, so a product equal to the identity must map
/// to the host's identity and any other product to its image.
#[derive(Debug, Clone, Copy)]
pub struct MappingCheckPredicate<'a> {
    source: &'a CayleyTable,
    target: &'a CayleyTable,
    first: Element,
}

impl<'a> MappingCheckPredicate<'a> {
    /// The mapping must be an isomorphism from `source` onto `target`.
    pub fn isomorphism(source: &'a CayleyTable, target: &'a CayleyTable) -> Self {
        Self {
            source,
            target,
            first: 0,
        }
    }

    /// The mapping must embed `sub` in `host`.
    pub fn embedding(sub: &'a CayleyTable, host: &'a CayleyTable) -> Self {
        Self {
            source: sub,
            target: host,
            first: 1,
        }
    }

    fn preserves_products(&self, slots: &[Element]) -> bool {
        let n = self.source.order();
        (self.first..n).all(|i| {
            (self.first..n).all(|j| {
                let product = self.target.get(image(slots, i), image(slots, j));
                product == image(slots, self.source.get(i, j))
            })
        })
    }
}

impl Predicate for MappingCheckPredicate<'_> {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.preserves_products(ctx.slots()) {
            PredicateResult::Success
        } else {
            trace!("mapping {:?} does not preserve products", ctx.slots());
            ctx.statistics.increment_counter(Counters::StructureMismatches);
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "MappingCheck"
    }
}

/// Checks that the image of an embedding is closed under conjugation by
/// every element of the host.
#[derive(Debug, Clone)]
pub struct NormalityPredicate<'a> {
    host: &'a CayleyTable,
    inverses: Vec<Element>,
}

impl<'a> NormalityPredicate<'a> {
    /// `inverses[g]` must be an inverse of `g` in `host`.
    pub fn new(host: &'a CayleyTable, inverses: Vec<Element>) -> Self {
        Self { host, inverses }
    }

    fn is_normal(&self, slots: &[Element]) -> bool {
        let mut members = vec![false; self.host.order()];
        members[0] = true;
        for &x in slots {
            members[x] = true;
        }
        let image: Vec<Element> = std::iter::once(0).chain(slots.iter().copied()).collect();
        self.inverses.iter().enumerate().all(|(g, &g_inv)| {
            image
                .iter()
                .all(|&x| members[self.host.get(self.host.get(g, x), g_inv)])
        })
    }
}

impl Predicate for NormalityPredicate<'_> {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.is_normal(ctx.slots()) {
            PredicateResult::Success
        } else {
            ctx.statistics.increment_counter(Counters::NonNormalEmbeddings);
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Normality"
    }
}
