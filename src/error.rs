// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table construction and the comparison searches.
//!
//! A search that finds nothing is not an error: "no embedding" is reported
//! as `None` or `false`. The variants here are faults in the input or in the
//! requested configuration.

use thiserror::Error;

use crate::search::AxiomFlags;

/// Errors raised while building or searching finite algebras.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The table is empty, not square, or not of the declared order.
    #[error("invalid table shape: {0}")]
    InvalidShape(String),

    /// A table entry does not name an element of the algebra.
    #[error("entry {value} at ({row}, {col}) is not an element of an algebra of order {order}")]
    ElementOutOfRange {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The entry itself.
        value: usize,
        /// Order of the table.
        order: usize,
    },

    /// The algebra was created from an order formula and has no table.
    #[error("algebra {name} has order {order} but no multiplication table")]
    MissingTable {
        /// Display name of the algebra, or `"<unnamed>"`.
        name: String,
        /// The known order.
        order: usize,
    },

    /// A group invariant was assumed but the table violates it.
    #[error("structure is not a group: {0}")]
    StructuralCorruption(String),

    /// No search strategy exists for the requested axiom combination.
    #[error("enumerating tables with axioms [{0}] is not implemented")]
    NotImplemented(AxiomFlags),

    /// Random generation gave up after its attempt budget.
    #[error("no group of order {order} found after {attempts} attempts")]
    SearchExhausted {
        /// Requested order.
        order: usize,
        /// Number of random tables tried.
        attempts: usize,
    },

    /// A family description such as `dih:4` could not be parsed.
    #[error("unknown algebra {0:?}; expected z:N, dih:N, klein, sym:N, psl:N:Q or psu:N:Q")]
    UnknownFamily(String),

    /// An order formula does not fit in a machine word.
    #[error("order of {family} overflows")]
    OrderOverflow {
        /// Family name, such as `PSL(4, 101)`.
        family: String,
    },
}
