// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore the search
//! slots on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Whether the predicate is still to be tried, is exploring choices, or is done
//! - The trail checkpoint to rewind to
//!
//! The execution model is WAM-like:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent entry with choices left
//! 6. If Suspend: pause and return control to caller
//!
//! A suspended engine resumes by backtracking out of the suspension point,
//! so calling [`SearchEngine::search`] repeatedly visits every solution once.
//!
//! # Example
//!
//! ```
//! use cayley_search::context::SearchContext;
//! use cayley_search::engine::EngineBuilder;
//! use cayley_search::predicates::test::IntegerRangePredicate;
//! use cayley_search::predicates::SuspendPredicate;
//!
//! let mut ctx = SearchContext::new(1);
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(IntegerRangePredicate::new(0, 10, 13)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! let mut seen = Vec::new();
//! while let Some(suspended) = engine.search(&mut ctx) {
//!     seen.push(ctx.slot(0));
//!     engine = suspended;
//! }
//! assert_eq!(seen, vec![10, 11, 12]);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Where a stack entry is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// try_pred has not been called yet.
    Call,
    /// Exploring choices `next..total` via retry_pred.
    Choice { next: usize, total: usize },
    /// try_pred succeeded deterministically; nothing left to try on backtrack.
    Done,
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    mode: Mode,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// Built with [`EngineBuilder`]. The engine runs predicates in sequence,
/// managing rounds, choices, and backtracking automatically via the trail.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate + 'a>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// True after a Suspend, until the next call to search.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl<'a> SearchEngine<'a> {
    fn new(predicates: Vec<Box<dyn Predicate + 'a>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to the next solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - the solution is visible in `ctx`, and
    ///   calling `search` again on the returned engine continues the search
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Success is indicated via side effects (state in `ctx`), not by the
    /// return value: programs never "complete", they either fail or suspend.
    ///
    /// The same `ctx` must be passed to every call on one engine.
    ///
    /// # Panics
    ///
    /// Panics if a terminal predicate returns Success (the sequence runs off
    /// its end), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            // Resume: the suspension point behaves like a failure.
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }

            self.stack.push(StackEntry {
                predicate_index: 0,
                round: 0,
                mode: Mode::Call,
                trail_checkpoint: ctx.trail.len(),
            });
        }

        loop {
            // Backtracked past the first predicate: search exhausted
            let entry = self.stack.last_mut()?;

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;
            let mode = entry.mode;

            match mode {
                Mode::Done => {
                    self.stack.pop();
                }
                Mode::Call => {
                    entry.mode = Mode::Done;
                    self.try_count += 1;
                    let result = self.predicates[pred_idx].try_pred(ctx, round);

                    match result {
                        PredicateResult::Success => self.push_next_predicate(ctx),
                        PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                        PredicateResult::Failure => {
                            self.stack.pop();
                        }
                        PredicateResult::Choices(n) => {
                            if let Some(entry) = self.stack.last_mut() {
                                entry.mode = Mode::Choice { next: 0, total: n };
                                entry.trail_checkpoint = ctx.trail.len();
                            }
                        }
                        PredicateResult::Suspend => {
                            self.suspended = true;
                            return Some(self);
                        }
                    }
                }
                Mode::Choice { next, total } => {
                    if next >= total {
                        // All choices exhausted
                        self.stack.pop();
                        continue;
                    }
                    entry.mode = Mode::Choice {
                        next: next + 1,
                        total,
                    };
                    self.retry_count += 1;
                    let result = self.predicates[pred_idx].retry_pred(ctx, round, next);

                    match result {
                        PredicateResult::Success => self.push_next_predicate(ctx),
                        PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                        PredicateResult::Failure => {
                            // Try next choice (loop continues)
                        }
                        PredicateResult::Choices(_) | PredicateResult::Suspend => {
                            panic!(
                                "{}::retry_pred returned invalid result: {:?}",
                                self.predicates[pred_idx].name(),
                                result
                            );
                        }
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry {
            predicate_index: next_index,
            round: 0,
            mode: Mode::Call,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (predicate_index, round) = self
            .stack
            .last()
            .map_or((0, 0), |entry| (entry.predicate_index, entry.round + 1));

        self.stack.push(StackEntry {
            predicate_index,
            round,
            mode: Mode::Call,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried since the search started.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a [`SearchEngine`].
///
/// Predicates are added in execution order and the sequence is closed with
/// a [`TerminalPredicate`]; only a closed sequence can be built.
#[derive(Debug, Default)]
pub struct EngineBuilder<'a> {
    predicates: Vec<Box<dyn Predicate + 'a>>,
}

impl<'a> EngineBuilder<'a> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate + 'a>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the sequence with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'a>(mut self, predicate: Box<T>) -> TerminatedBuilder<'a> {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A predicate sequence that ends in a terminal predicate.
#[derive(Debug)]
pub struct TerminatedBuilder<'a> {
    predicates: Vec<Box<dyn Predicate + 'a>>,
}

impl<'a> TerminatedBuilder<'a> {
    pub fn build(self) -> SearchEngine<'a> {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that offers two choices and writes the choice to slot 0.
    #[derive(Debug)]
    struct TwoWay;

    impl Predicate for TwoWay {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(2)
        }

        fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            ctx.assign(0, choice + 1);
            PredicateResult::Success
        }
    }

    /// Terminal that wrongly succeeds.
    #[derive(Debug)]
    struct BrokenTerminal;

    impl Predicate for BrokenTerminal {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    impl TerminalPredicate for BrokenTerminal {}

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = SearchContext::new(0);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some()); // Suspended - engine returned
        let engine = engine.unwrap();
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
    }

    #[test]
    fn test_deterministic_success_is_not_retried() {
        let mut ctx = SearchContext::new(0);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::new(0);
        let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();

        let result = engine.search(&mut ctx);
        assert!(result.is_none()); // Exhausted - engine consumed
    }

    #[test]
    fn test_resume_visits_each_choice_and_restores_slots() {
        let mut ctx = SearchContext::new(1);
        let engine = EngineBuilder::new()
            .add(Box::new(TwoWay))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.slot(0), 1);
        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.slot(0), 2);
        assert_eq!(engine.statistics(), (3, 2));
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.slot(0), 0); // Trail fully rewound
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_terminal() {
        let mut ctx = SearchContext::new(0);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(BrokenTerminal))
            .build();

        let _ = engine.search(&mut ctx); // Should panic
    }
}
