// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of Cayley tables.
//!
//! # Example
//!
//! ```
//! use cayley_search::search::{AxiomFlags, TableEnumerator};
//!
//! let groups = TableEnumerator::new(4, AxiomFlags::groups()).unwrap();
//! // Four labeled groups of order 4 fix element 0 as the identity.
//! assert_eq!(groups.iter().count(), 4);
//! // The sequence can be walked again from the start.
//! assert_eq!(groups.iter().count(), 4);
//! ```

use log::debug;

use super::strategy::{AxiomFlags, SearchStrategy};
use crate::algebra::{CayleyTable, FiniteAlgebra};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::AlgebraError;
use crate::predicates::{AxiomFilterPredicate, CellPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};

/// Every labeled table of a given order that satisfies a set of axioms.
///
/// Element 0 is the identity of every table produced. Tables come out in
/// odometer order over the free cells, row-major, with values ascending
/// and the last cell varying fastest. Tables equal up to relabeling are all
/// produced.
#[derive(Debug, Clone, Copy)]
pub struct TableEnumerator {
    order: usize,
    flags: AxiomFlags,
    strategy: SearchStrategy,
}

impl TableEnumerator {
    /// Fails with [`AlgebraError::NotImplemented`] for axiom combinations
    /// without a [`SearchStrategy`], and with [`AlgebraError::InvalidShape`]
    /// for order 0.
    pub fn new(order: usize, flags: AxiomFlags) -> Result<Self, AlgebraError> {
        let strategy = SearchStrategy::from_flags(flags)?;
        if order == 0 {
            return Err(AlgebraError::InvalidShape(
                "cannot enumerate tables of order 0".to_string(),
            ));
        }
        Ok(Self {
            order,
            flags,
            strategy,
        })
    }

    pub fn groups(order: usize) -> Result<Self, AlgebraError> {
        Self::new(order, AxiomFlags::groups())
    }

    pub fn loops(order: usize) -> Result<Self, AlgebraError> {
        Self::new(order, AxiomFlags::loops())
    }

    pub fn monoids(order: usize) -> Result<Self, AlgebraError> {
        Self::new(order, AxiomFlags::monoids())
    }

    /// Always [`AlgebraError::NotImplemented`].
    pub fn semigroups(order: usize) -> Result<Self, AlgebraError> {
        Self::new(order, AxiomFlags::semigroups())
    }

    /// Always [`AlgebraError::NotImplemented`].
    pub fn abelian_groups(order: usize) -> Result<Self, AlgebraError> {
        Self::new(order, AxiomFlags::abelian_groups())
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn flags(&self) -> AxiomFlags {
        self.flags
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Start a fresh walk over the tables.
    pub fn iter(&self) -> Tables {
        let engine = EngineBuilder::new()
            .add(Box::new(CellPredicate::new(self.order, self.strategy)))
            .add(Box::new(AxiomFilterPredicate::new(self.order, self.strategy)))
            .add(Statistics::counting_predicate(Counters::Candidates, None))
            .terminal(Box::new(SuspendPredicate))
            .build();
        Tables {
            order: self.order,
            strategy: self.strategy,
            engine: Some(engine),
            ctx: SearchContext::new(CellPredicate::cells(self.order)),
        }
    }
}

impl IntoIterator for &TableEnumerator {
    type Item = FiniteAlgebra;
    type IntoIter = Tables;

    fn into_iter(self) -> Tables {
        self.iter()
    }
}

/// One walk over the tables of a [`TableEnumerator`].
#[derive(Debug)]
pub struct Tables {
    order: usize,
    strategy: SearchStrategy,
    engine: Option<SearchEngine<'static>>,
    ctx: SearchContext,
}

impl Tables {
    /// Counters for the walk so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for Tables {
    type Item = FiniteAlgebra;

    fn next(&mut self) -> Option<FiniteAlgebra> {
        let engine = self.engine.take()?;
        match engine.search(&mut self.ctx) {
            Some(suspended) => {
                self.engine = Some(suspended);
                let table = CayleyTable::with_identity_border(self.order, self.ctx.slots());
                Some(FiniteAlgebra::from_cayley(table))
            }
            None => {
                debug!(
                    "{:?} tables of order {} exhausted: {}",
                    self.strategy, self.order, self.ctx.statistics
                );
                None
            }
        }
    }
}
