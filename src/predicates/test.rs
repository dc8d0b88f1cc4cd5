// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Test predicates for validating the search engine.
//!
//! These predicates are simple examples that demonstrate how the engine works
//! without any algebra. They're useful for:
//! - Testing the engine's backtracking logic
//! - Validating trail integration
//! - Providing examples for implementing real predicates
//!
//! # Execution Model
//!
//! These predicates follow the WAM-like execution model:
//! - `try_pred(round)` is called first and can return Choices(n)
//! - Engine then calls `retry_pred(round, choice)` for choice in 0..n
//! - Searches succeed via side effects, then Suspend or Fail to terminate

use std::fmt;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Predicate that tries integers in a range using the Choices model.
///
/// - try_pred returns Choices(n) where n is the range size
/// - retry_pred(round, choice) writes `start + choice` into its slot
///
/// # Example
///
/// ```
/// use cayley_search::engine::EngineBuilder;
/// use cayley_search::predicates::test::IntegerRangePredicate;
/// use cayley_search::predicates::SuspendPredicate;
/// use cayley_search::context::SearchContext;
///
/// let mut ctx = SearchContext::new(1);
/// let engine = EngineBuilder::new()
///     .add(Box::new(IntegerRangePredicate::new(0, 1, 4)))  // Try 1, 2, 3
///     .terminal(Box::new(SuspendPredicate))                 // Terminal predicate
///     .build();
///
/// let engine = engine.search(&mut ctx);
/// assert!(engine.is_some()); // Suspended - engine returned
/// assert_eq!(ctx.slot(0), 1);
/// ```
#[derive(Debug)]
pub struct IntegerRangePredicate {
    slot: usize,
    start: usize,
    end: usize,
}

impl IntegerRangePredicate {
    /// Create a new IntegerRangePredicate that tries integers in [start, end),
    /// recording the current one in `slot`.
    pub fn new(slot: usize, start: usize, end: usize) -> Self {
        Self { slot, start, end }
    }

    /// Get the count of integers in the range.
    pub fn count(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl Predicate for IntegerRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let count = self.count();
        if count > 0 {
            PredicateResult::Choices(count)
        } else {
            PredicateResult::Failure
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let value = self.start + choice;
        if value < self.end {
            ctx.assign(self.slot, value);
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "IntegerRange"
    }
}

/// Predicate that accepts only choices whose value satisfies a condition
/// on the slots chosen so far.
///
/// Used to exercise failing retries and backtracking in tests.
pub struct ChoicePredicate {
    slot: usize,
    options: Vec<usize>,
    accept: fn(&[usize], usize) -> bool,
}

impl ChoicePredicate {
    /// Create a ChoicePredicate writing accepted options into `slot`.
    pub fn new(slot: usize, options: Vec<usize>, accept: fn(&[usize], usize) -> bool) -> Self {
        Self {
            slot,
            options,
            accept,
        }
    }
}

impl fmt::Debug for ChoicePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoicePredicate(slot {}, {:?})", self.slot, self.options)
    }
}

impl Predicate for ChoicePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.options.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.options.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let value = self.options[choice];
        if (self.accept)(ctx.slots(), value) {
            ctx.assign(self.slot, value);
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Choice"
    }
}

/// Predicate that succeeds N times using SuccessSamePredicate (for testing rounds).
///
/// Demonstrates how predicates can execute multiple rounds:
/// - Round 0, 1, ..., N-2: return SuccessSamePredicate
/// - Round N-1: return Success to advance
#[derive(Debug)]
pub struct MultiRoundPredicate {
    rounds: usize,
}

impl MultiRoundPredicate {
    /// Create a predicate that executes for `rounds` rounds.
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl Predicate for MultiRoundPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else if round + 1 == self.rounds {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    #[test]
    fn test_integer_range_predicate() {
        let mut ctx = SearchContext::new(1);
        let mut pred = IntegerRangePredicate::new(0, 1, 4);

        // try_pred should return Choices(3) for range 1..4
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));

        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Success);
        assert_eq!(ctx.slot(0), 1);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 2), PredicateResult::Success);
        assert_eq!(ctx.slot(0), 3);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 3), PredicateResult::Failure); // past end
    }

    #[test]
    fn test_choice_predicate_filters() {
        let mut ctx = SearchContext::new(2);
        ctx.assign(0, 5);
        let mut pred = ChoicePredicate::new(1, vec![4, 5, 6], |slots, value| value != slots[0]);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));
        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 2), PredicateResult::Success);
        assert_eq!(ctx.slot(1), 6);
    }

    #[test]
    fn test_empty_choice_predicate() {
        let mut ctx = SearchContext::new(1);
        let mut pred = ChoicePredicate::new(0, vec![], |_, _| true);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_builtin_terminals() {
        let mut ctx = SearchContext::new(0);
        assert_eq!(SuspendPredicate.try_pred(&mut ctx, 0), PredicateResult::Suspend);
        assert_eq!(FailPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_multi_round_predicate() {
        let mut ctx = SearchContext::new(0);
        let mut pred = MultiRoundPredicate::new(3);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Success);
        assert_eq!(pred.try_pred(&mut ctx, 3), PredicateResult::Failure);
    }
}
