// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Isomorphism of two tables by search over relabelings fixing the identity.

use std::iter;

use log::debug;

use crate::algebra::{Element, ElementOrders, FiniteAlgebra};
use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::AlgebraError;
use crate::predicates::{MappingCheckPredicate, PermutationPredicate, SuspendPredicate};

/// Find the first relabeling `π`, in lexicographic order, with
/// `b[π(i)][π(j)] == π(a[i][j])` for all `i` and `j`.
///
/// The result has length `a.order()`, maps `0` to `0`, and maps `i` to
/// `result[i]`. Algebras of different orders are never isomorphic. Both
/// algebras are expected to be groups: computing element orders on another
/// table may fail with [`AlgebraError::StructuralCorruption`].
pub fn find_isomorphism(
    a: &FiniteAlgebra,
    b: &FiniteAlgebra,
) -> Result<Option<Vec<Element>>, AlgebraError> {
    if a.order() != b.order() {
        return Ok(None);
    }
    let (source, target) = (a.cayley()?, b.cayley()?);
    let source_orders = ElementOrders::compute(source)?;
    let target_orders = ElementOrders::compute(target)?;

    let mut ctx = SearchContext::new(source.order() - 1);
    let engine = EngineBuilder::new()
        .add(Box::new(PermutationPredicate::new(source_orders, target_orders)))
        .add(Box::new(MappingCheckPredicate::isomorphism(source, target)))
        .terminal(Box::new(SuspendPredicate))
        .build();
    let found = engine
        .search(&mut ctx)
        .map(|_| iter::once(0).chain(ctx.slots().iter().copied()).collect());
    debug!(
        "isomorphism of order {}: {} ({})",
        source.order(),
        if found.is_some() { "found" } else { "none" },
        ctx.statistics
    );
    Ok(found)
}

/// Whether some relabeling fixing `0` carries `a` onto `b`.
pub fn is_isomorphic(a: &FiniteAlgebra, b: &FiniteAlgebra) -> Result<bool, AlgebraError> {
    Ok(find_isomorphism(a, b)?.is_some())
}
