// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that fill in a Cayley table cell by cell.
//!
//! Row 0 and column 0 are fixed by the identity convention. The remaining
//! `(n-1)^2` cells are the search slots, in row-major order over rows and
//! columns `1..n`. [`CellPredicate`] runs one round per slot and offers the
//! values `0..n` in ascending order, so together with the engine's
//! depth-first traversal the complete tables come out in odometer order
//! with the last cell varying fastest.
//!
//! A partial table is abandoned as soon as no completion of it could pass
//! the strategy's filters; this never changes which tables are produced or
//! their order. [`AxiomFilterPredicate`] then applies the filters to each
//! complete table, invertibility before associativity.

use itertools::iproduct;
use log::trace;

use crate::algebra::{has_unique_inverses, is_associative, CayleyTable, Element};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::search::SearchStrategy;
use crate::state::Counters;

/// A table whose first `assigned` free cells are known.
struct PartialTable<'s> {
    order: usize,
    free: &'s [Element],
    assigned: usize,
}

impl PartialTable<'_> {
    fn get(&self, i: Element, j: Element) -> Option<Element> {
        if i == 0 {
            return Some(j);
        }
        if j == 0 {
            return Some(i);
        }
        let index = (i - 1) * (self.order - 1) + (j - 1);
        (index < self.assigned).then(|| self.free[index])
    }

    /// `Some(false)` when `(i·j)·k` and `i·(j·k)` are both known and differ.
    fn associates(&self, i: Element, j: Element, k: Element) -> Option<bool> {
        let ij = self.get(i, j)?;
        let jk = self.get(j, k)?;
        Some(self.get(ij, k)? == self.get(i, jk)?)
    }

    /// The cell just assigned repeats a value already in its row or column.
    fn repeats(&self, row: Element, col: Element) -> bool {
        let value = self.get(row, col);
        (0..col).any(|c| self.get(row, c) == value) || (0..row).any(|r| self.get(r, col) == value)
    }

    /// The row or column of the cell just assigned can no longer hold the
    /// identity exactly once.
    fn blocks_inverses(&self, row: Element, col: Element) -> bool {
        let last = self.order - 1;
        let in_row = (0..=col).filter(|&c| self.get(row, c) == Some(0)).count();
        let in_col = (0..=row).filter(|&r| self.get(r, col) == Some(0)).count();
        in_row > 1 || in_col > 1 || (col == last && in_row == 0) || (row == last && in_col == 0)
    }

    /// Some triple whose four cells just became known does not associate.
    ///
    /// A triple's cells become known when its last one is assigned, and the
    /// cell just assigned can play one of four roles in it.
    fn breaks_associativity(&self, row: Element, col: Element) -> bool {
        let n = self.order;
        let fails = |i, j, k| self.associates(i, j, k) == Some(false);
        (0..n).any(|k| fails(row, col, k))
            || (0..n).any(|i| fails(i, row, col))
            || iproduct!(0..n, 0..n).any(|(i, j)| self.get(i, j) == Some(row) && fails(i, j, col))
            || iproduct!(0..n, 0..n).any(|(j, k)| self.get(j, k) == Some(col) && fails(row, j, k))
    }

    fn violation(&self, row: Element, col: Element, strategy: SearchStrategy) -> Option<Counters> {
        if strategy.is_latin() && self.repeats(row, col) {
            Some(Counters::LatinRejections)
        } else if strategy.enforces_invertibility() && self.blocks_inverses(row, col) {
            Some(Counters::InvertibilityRejections)
        } else if strategy.enforces_associativity() && self.breaks_associativity(row, col) {
            Some(Counters::AssociativityRejections)
        } else {
            None
        }
    }
}

/// Chooses the value of each free cell in turn.
#[derive(Debug, Clone, Copy)]
pub struct CellPredicate {
    order: usize,
    strategy: SearchStrategy,
}

impl CellPredicate {
    pub fn new(order: usize, strategy: SearchStrategy) -> Self {
        Self { order, strategy }
    }

    /// Number of free cells, which is also the number of search slots needed.
    pub fn cells(order: usize) -> usize {
        (order - 1) * (order - 1)
    }
}

impl Predicate for CellPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == Self::cells(self.order) {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(self.order)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        ctx.assign(round, choice);

        let row = round / (self.order - 1) + 1;
        let col = round % (self.order - 1) + 1;
        let partial = PartialTable {
            order: self.order,
            free: ctx.slots(),
            assigned: round + 1,
        };
        match partial.violation(row, col, self.strategy) {
            Some(counter) => {
                trace!("cell ({}, {}) = {} pruned: {:?}", row, col, choice, counter);
                ctx.statistics.increment_counter(counter);
                PredicateResult::Failure
            }
            None => PredicateResult::SuccessSamePredicate,
        }
    }

    fn name(&self) -> &str {
        "Cell"
    }
}

/// Applies the strategy's axiom filters to a complete table.
#[derive(Debug, Clone, Copy)]
pub struct AxiomFilterPredicate {
    order: usize,
    strategy: SearchStrategy,
}

impl AxiomFilterPredicate {
    pub fn new(order: usize, strategy: SearchStrategy) -> Self {
        Self { order, strategy }
    }
}

impl Predicate for AxiomFilterPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let table = CayleyTable::with_identity_border(self.order, ctx.slots());
        let rejection = if self.strategy.enforces_invertibility() && !has_unique_inverses(&table) {
            Some(Counters::InvertibilityRejections)
        } else if self.strategy.enforces_associativity() && !is_associative(&table) {
            Some(Counters::AssociativityRejections)
        } else {
            None
        };
        match rejection {
            Some(counter) => {
                ctx.statistics.increment_counter(counter);
                PredicateResult::Failure
            }
            None => PredicateResult::Success,
        }
    }

    fn name(&self) -> &str {
        "AxiomFilter"
    }
}
