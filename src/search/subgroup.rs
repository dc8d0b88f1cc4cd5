// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Embeddings of one table in another, and normality of their images.
//!
//! An embedding of `sub` (order `n1`) in `host` (order `n2`) sends `0` to
//! `0` and the remaining elements, in order, to an increasing choice of
//! `n1 - 1` non-identity host elements. Embeddings are visited in
//! lexicographic order of those choices. This covers each image set once;
//! the mapping onto it is fixed by the ordering.

use std::iter;

use log::debug;

use crate::algebra::{inverse_of, CayleyTable, Element, FiniteAlgebra};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::AlgebraError;
use crate::predicates::{
    CombinationPredicate, MappingCheckPredicate, NormalityPredicate, SuspendPredicate,
};
use crate::state::{Counters, Statistics};

/// Lazy sequence of the embeddings of one algebra in another.
///
/// Each item has length `sub.order()` and maps element `i` of `sub` to
/// `item[i]` in the host.
#[derive(Debug)]
pub struct SubgroupEmbeddings<'a> {
    engine: Option<SearchEngine<'a>>,
    ctx: SearchContext,
}

impl<'a> SubgroupEmbeddings<'a> {
    fn new(sub: &'a CayleyTable, host: &'a CayleyTable, inverses: Option<Vec<Element>>) -> Self {
        let picks = sub.order() - 1;
        let mut builder = EngineBuilder::new()
            .add(Box::new(CombinationPredicate::new(picks, host.order())))
            .add(Box::new(MappingCheckPredicate::embedding(sub, host)))
            .add(Statistics::counting_predicate(Counters::Embeddings, None));
        if let Some(inverses) = inverses {
            builder = builder.add(Box::new(NormalityPredicate::new(host, inverses)));
        }
        Self {
            engine: Some(builder.terminal(Box::new(SuspendPredicate)).build()),
            ctx: SearchContext::new(picks),
        }
    }

    fn empty() -> Self {
        Self {
            engine: None,
            ctx: SearchContext::default(),
        }
    }

    /// Counters for the search so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for SubgroupEmbeddings<'_> {
    type Item = Vec<Element>;

    fn next(&mut self) -> Option<Vec<Element>> {
        let engine = self.engine.take()?;
        match engine.search(&mut self.ctx) {
            Some(suspended) => {
                self.engine = Some(suspended);
                Some(iter::once(0).chain(self.ctx.slots().iter().copied()).collect())
            }
            None => {
                debug!("embedding search exhausted: {}", self.ctx.statistics);
                None
            }
        }
    }
}

/// All embeddings of `sub` in `host`, lazily.
///
/// Empty when `sub` is larger than `host`.
pub fn subgroup_embeddings<'a>(
    sub: &'a FiniteAlgebra,
    host: &'a FiniteAlgebra,
) -> Result<SubgroupEmbeddings<'a>, AlgebraError> {
    if sub.order() > host.order() {
        return Ok(SubgroupEmbeddings::empty());
    }
    Ok(SubgroupEmbeddings::new(sub.cayley()?, host.cayley()?, None))
}

/// The first embedding of `sub` in `host`, if any.
pub fn find_subgroup(
    sub: &FiniteAlgebra,
    host: &FiniteAlgebra,
) -> Result<Option<Vec<Element>>, AlgebraError> {
    Ok(subgroup_embeddings(sub, host)?.next())
}

/// Whether `sub` embeds in `host`.
pub fn is_subgroup(sub: &FiniteAlgebra, host: &FiniteAlgebra) -> Result<bool, AlgebraError> {
    Ok(find_subgroup(sub, host)?.is_some())
}

/// Whether some embedding of `sub` in `host` has an image closed under
/// conjugation by every host element.
///
/// False when `sub` does not embed at all. Otherwise conjugation needs host
/// inverses, and a host row without the identity is
/// [`AlgebraError::StructuralCorruption`].
pub fn is_normal_subgroup(sub: &FiniteAlgebra, host: &FiniteAlgebra) -> Result<bool, AlgebraError> {
    if !is_subgroup(sub, host)? {
        return Ok(false);
    }
    let (sub_table, host_table) = (sub.cayley()?, host.cayley()?);
    let inverses = (0..host_table.order())
        .map(|g| inverse_of(host_table, g))
        .collect::<Result<Vec<_>, _>>()?;

    let mut embeddings = SubgroupEmbeddings::new(sub_table, host_table, Some(inverses));
    let normal = embeddings.next().is_some();
    debug!(
        "normal subgroup of order {} in order {}: {} ({})",
        sub_table.order(),
        host_table.order(),
        normal,
        embeddings.statistics()
    );
    Ok(normal)
}
