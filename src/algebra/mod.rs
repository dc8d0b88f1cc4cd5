// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finite algebras represented by their Cayley tables.
//!
//! Elements are labeled `0..order`. Whenever a structure is meant to be a
//! group or monoid, element `0` is its two-sided identity: the enumerator
//! and every search that needs a group rely on this convention.
//!
//! ## Module Structure
//!
//! - `axioms`: identity, inverse, associativity and commutativity checks
//! - `orders`: element orders of a group table
//! - `product`: direct products

pub mod axioms;
pub mod orders;
pub mod product;

pub use axioms::{
    has_identity, has_unique_inverses, inverse_of, is_associative, is_commutative, is_group,
};
pub use orders::ElementOrders;
pub use product::direct_product;

use std::fmt;

use crate::error::AlgebraError;

/// Label of an element of a finite algebra.
pub type Element = usize;

/// Dense `order × order` multiplication table.
///
/// `get(i, j)` is the result of combining `i` with `j`, in that order.
/// Construction checks the shape and that every entry names an element;
/// none of the algebraic axioms are checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CayleyTable {
    order: usize,
    cells: Vec<Element>,
}

impl CayleyTable {
    /// Build a table from its rows.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, AlgebraError> {
        let order = rows.len();
        if order == 0 {
            return Err(AlgebraError::InvalidShape(
                "a table needs at least one element".to_string(),
            ));
        }
        let mut cells = Vec::with_capacity(order * order);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != order {
                return Err(AlgebraError::InvalidShape(format!(
                    "row {} has {} entries, expected {}",
                    row,
                    entries.len(),
                    order
                )));
            }
            cells.extend(entries);
        }
        Self::from_cells(order, cells)
    }

    /// Build a table from row-major cells.
    pub fn from_cells(order: usize, cells: Vec<Element>) -> Result<Self, AlgebraError> {
        if order == 0 || cells.len() != order * order {
            return Err(AlgebraError::InvalidShape(format!(
                "{} cells cannot form a table of order {}",
                cells.len(),
                order
            )));
        }
        if let Some(index) = cells.iter().position(|&value| value >= order) {
            return Err(AlgebraError::ElementOutOfRange {
                row: index / order,
                col: index % order,
                value: cells[index],
                order,
            });
        }
        Ok(Self { order, cells })
    }

    /// Build a table whose row 0 and column 0 follow the identity convention.
    ///
    /// `free` holds the `(order-1)^2` remaining cells, row-major over rows and
    /// columns `1..order`. Entries are trusted to be in range.
    pub(crate) fn with_identity_border(order: usize, free: &[Element]) -> Self {
        debug_assert_eq!(free.len(), (order - 1) * (order - 1));
        let mut cells = Vec::with_capacity(order * order);
        cells.extend(0..order);
        for (row, chunk) in (1..order).zip(free.chunks(order.max(2) - 1)) {
            cells.push(row);
            cells.extend_from_slice(chunk);
        }
        Self { order, cells }
    }

    /// Number of elements.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The product of `i` and `j`.
    #[inline]
    pub fn get(&self, i: Element, j: Element) -> Element {
        self.cells[i * self.order + j]
    }

    /// Row `i` of the table.
    pub fn row(&self, i: Element) -> &[Element] {
        &self.cells[i * self.order..(i + 1) * self.order]
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Element]> {
        self.cells.chunks(self.order)
    }

    /// Copy the table into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.rows().map(<[Element]>::to_vec).collect()
    }
}

impl fmt::Display for CayleyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.order - 1).to_string().len();
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A finite algebra: an optional name, an order, and usually a table.
///
/// Values are immutable. There are two ways to make one: from a table, in
/// which case the order is the table's, or from an order alone, for families
/// known only by their order formula. Algorithms that need the table report
/// [`AlgebraError::MissingTable`] on the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteAlgebra {
    name: Option<String>,
    order: usize,
    table: Option<CayleyTable>,
}

impl FiniteAlgebra {
    /// Create an algebra from the rows of its Cayley table.
    pub fn from_table(rows: Vec<Vec<Element>>) -> Result<Self, AlgebraError> {
        Ok(Self::from_cayley(CayleyTable::from_rows(rows)?))
    }

    /// Wrap an already validated table.
    pub fn from_cayley(table: CayleyTable) -> Self {
        Self {
            name: None,
            order: table.order(),
            table: Some(table),
        }
    }

    /// An algebra known only by its order.
    pub fn abstract_of_order(order: usize, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            order,
            table: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of elements.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The table, if this algebra has one.
    pub fn table(&self) -> Option<&CayleyTable> {
        self.table.as_ref()
    }

    /// The table, or [`AlgebraError::MissingTable`].
    pub fn cayley(&self) -> Result<&CayleyTable, AlgebraError> {
        self.table.as_ref().ok_or_else(|| AlgebraError::MissingTable {
            name: self.name().unwrap_or("<unnamed>").to_string(),
            order: self.order,
        })
    }
}

impl fmt::Display for FiniteAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "{} (order {})", name, self.order)?,
            None => writeln!(f, "order {}", self.order)?,
        }
        match &self.table {
            Some(table) => write!(f, "{}", table),
            None => writeln!(f, "(no table)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_table_derives_order() {
        let algebra = FiniteAlgebra::from_table(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(algebra.order(), 2);
        assert_eq!(algebra.name(), None);
        assert_eq!(algebra.cayley().unwrap().get(1, 1), 0);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = FiniteAlgebra::from_table(vec![vec![0, 1], vec![1]]);
        assert!(matches!(result, Err(AlgebraError::InvalidShape(_))));
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = FiniteAlgebra::from_table(vec![]);
        assert!(matches!(result, Err(AlgebraError::InvalidShape(_))));
    }

    #[test]
    fn test_rejects_entry_out_of_range() {
        let result = FiniteAlgebra::from_table(vec![vec![0, 1], vec![1, 2]]);
        assert_eq!(
            result,
            Err(AlgebraError::ElementOutOfRange {
                row: 1,
                col: 1,
                value: 2,
                order: 2
            })
        );
    }

    #[test]
    fn test_abstract_has_no_table() {
        let algebra = FiniteAlgebra::abstract_of_order(60, "A5");
        assert_eq!(algebra.order(), 60);
        assert!(algebra.table().is_none());
        assert_eq!(
            algebra.cayley(),
            Err(AlgebraError::MissingTable {
                name: "A5".to_string(),
                order: 60
            })
        );
    }

    #[test]
    fn test_identity_border() {
        let table = CayleyTable::with_identity_border(3, &[2, 0, 0, 1]);
        assert_eq!(table.to_rows(), vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);

        let trivial = CayleyTable::with_identity_border(1, &[]);
        assert_eq!(trivial.to_rows(), vec![vec![0]]);
    }

    #[test]
    fn test_display() {
        let algebra = FiniteAlgebra::from_table(vec![vec![0, 1], vec![1, 0]])
            .unwrap()
            .with_name("Z2");
        assert_eq!(algebra.to_string(), "Z2 (order 2)\n0 1\n1 0\n");
    }
}
