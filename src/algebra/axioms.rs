// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Axiom checks on Cayley tables.
//!
//! Each check is independent and reads the table only. The inverse and
//! associativity checks are meaningful only once [`has_identity`] holds; it
//! is the caller's job to check identity first, as [`is_group`] does.

use itertools::iproduct;

use super::{CayleyTable, Element, FiniteAlgebra};
use crate::error::AlgebraError;

/// Row 0 and column 0 are the identity: `0·i == i·0 == i` for all `i`.
pub fn has_identity(table: &CayleyTable) -> bool {
    (0..table.order()).all(|i| table.get(i, 0) == i && table.get(0, i) == i)
}

/// Every row and every column contains the identity exactly once.
pub fn has_unique_inverses(table: &CayleyTable) -> bool {
    let n = table.order();
    (0..n).all(|i| {
        let in_row = (0..n).filter(|&j| table.get(i, j) == 0).count();
        let in_col = (0..n).filter(|&j| table.get(j, i) == 0).count();
        in_row == 1 && in_col == 1
    })
}

/// `(i·j)·k == i·(j·k)` for every triple. Cost is O(n^3).
pub fn is_associative(table: &CayleyTable) -> bool {
    let n = table.order();
    iproduct!(0..n, 0..n, 0..n)
        .all(|(i, j, k)| table.get(table.get(i, j), k) == table.get(i, table.get(j, k)))
}

/// `i·j == j·i` for every pair.
pub fn is_commutative(table: &CayleyTable) -> bool {
    let n = table.order();
    iproduct!(0..n, 0..n).all(|(i, j)| i >= j || table.get(i, j) == table.get(j, i))
}

/// Whether `algebra` is a group with identity `0`.
///
/// Algebras without a table are never groups.
pub fn is_group(algebra: &FiniteAlgebra) -> bool {
    let Some(table) = algebra.table() else {
        return false;
    };
    table.order() == algebra.order()
        && has_identity(table)
        && has_unique_inverses(table)
        && is_associative(table)
}

/// The right inverse of `g`: the first `j` with `g·j == 0`.
pub fn inverse_of(table: &CayleyTable, g: Element) -> Result<Element, AlgebraError> {
    table
        .row(g)
        .iter()
        .position(|&value| value == 0)
        .ok_or_else(|| AlgebraError::StructuralCorruption(format!("element {} has no inverse", g)))
}
