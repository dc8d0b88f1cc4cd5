// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used by the searches.
//! Each predicate represents a choice point or a check in the search space.
//!
//! # Organization
//!
//! - `cells`: CellPredicate and AxiomFilterPredicate for table enumeration
//! - `relabel`: PermutationPredicate and CombinationPredicate, which choose images of elements
//! - `checks`: MappingCheckPredicate and NormalityPredicate, which test a complete relabeling
//! - `test`: Simple test predicates for validating the engine
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod cells;
pub mod checks;
pub mod relabel;
pub mod test;

// Re-export main predicates for convenience
pub use cells::{AxiomFilterPredicate, CellPredicate};
pub use checks::{MappingCheckPredicate, NormalityPredicate};
pub use relabel::{CombinationPredicate, PermutationPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. It's a terminal predicate
/// that ends a search path without success, similar to Prolog's `fail.` built-in.
/// Used after counting predicates to visit every solution in one call.
///
/// # Example
///
/// ```
/// use cayley_search::engine::EngineBuilder;
/// use cayley_search::predicates::FailPredicate;
/// use cayley_search::predicates::test::IntegerRangePredicate;
/// use cayley_search::context::SearchContext;
///
/// let mut ctx = SearchContext::new(1);
/// let engine = EngineBuilder::new()
///     .add(Box::new(IntegerRangePredicate::new(0, 1, 3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all integer choices then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, handing the current solution to the caller.
///
/// Every lazy sequence in this crate ends its predicate sequence with this.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
