// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that choose where the elements of one algebra go in another.
//!
//! The identity always maps to the identity, so slot `r` holds the image of
//! element `r + 1`. Images are offered in ascending order, so relabelings
//! are visited in lexicographic order.

use log::trace;

use crate::algebra::ElementOrders;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Builds a bijection between two algebras of the same order, one element
/// at a time, rejecting images whose element order differs.
#[derive(Debug, Clone)]
pub struct PermutationPredicate {
    source: ElementOrders,
    target: ElementOrders,
}

impl PermutationPredicate {
    /// Both order indices must have the same length.
    pub fn new(source: ElementOrders, target: ElementOrders) -> Self {
        debug_assert_eq!(source.len(), target.len());
        Self { source, target }
    }

    fn movable(&self) -> usize {
        self.source.len().saturating_sub(1)
    }
}

impl Predicate for PermutationPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == self.movable() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(self.movable())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let element = round + 1;
        let image = choice + 1;
        if ctx.slots()[..round].contains(&image) {
            return PredicateResult::Failure;
        }
        if self.source.steps(element) != self.target.steps(image) {
            trace!("{} -> {} rejected: element orders differ", element, image);
            ctx.statistics.increment_counter(Counters::OrderMismatches);
            return PredicateResult::Failure;
        }
        ctx.assign(round, image);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Permutation"
    }
}

/// Chooses an increasing sequence of `picks` distinct non-identity elements
/// of a host of order `host_order`.
#[derive(Debug, Clone, Copy)]
pub struct CombinationPredicate {
    picks: usize,
    host_order: usize,
}

impl CombinationPredicate {
    pub fn new(picks: usize, host_order: usize) -> Self {
        Self { picks, host_order }
    }
}

impl Predicate for CombinationPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == self.picks {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(self.host_order - 1)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let image = choice + 1;
        let previous = if round == 0 { 0 } else { ctx.slot(round - 1) };
        let still_needed = self.picks - round - 1;
        if image <= previous || image + still_needed >= self.host_order {
            return PredicateResult::Failure;
        }
        ctx.assign(round, image);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Combination"
    }
}
