// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finite algebras as Cayley tables, and searches over them.
//!
//! A [`FiniteAlgebra`] is a multiplication table on the elements
//! `0..order`, with `0` the identity whenever there is one. On top of that
//! the crate provides:
//!
//! - axiom checks ([`has_identity`], [`is_associative`], [`is_group`], ...)
//! - exhaustive enumeration of the tables of an order satisfying chosen
//!   axioms ([`TableEnumerator`])
//! - comparison by search over relabelings: [`is_isomorphic`],
//!   [`is_subgroup`], [`subgroup_embeddings`] and [`is_normal_subgroup`]
//! - [`direct_product`] and the named families in [`families`]
//!
//! # Architecture
//!
//! Every search runs on a small WAM-like backtracking engine:
//!
//! - **Predicates** ([`engine::Predicate`]) are the choice points and checks.
//!   A search is a sequence of them ending in a fail or suspend predicate.
//! - **[`SearchContext`]** holds the mutable state: a slot per choice,
//!   the trail that restores slots on backtracking, and counters.
//! - **Algebras are immutable.** Predicates borrow the tables they read.
//!
//! Lazy sequences suspend the engine at each solution and resume it on the
//! next call, so the search state between items is just the engine stack
//! and the trail.
//!
//! # Example
//!
//! ```
//! use cayley_search::families::{cyclic, dihedral};
//! use cayley_search::{is_isomorphic, is_normal_subgroup};
//!
//! let z4 = cyclic(4).unwrap();
//! let v4 = dihedral(2).unwrap();
//! assert!(!is_isomorphic(&z4, &v4).unwrap());
//!
//! let rotations = cyclic(3).unwrap();
//! assert!(is_normal_subgroup(&rotations, &dihedral(3).unwrap()).unwrap());
//! ```

pub mod algebra;
pub mod context;
pub mod engine;
pub mod error;
pub mod families;
pub mod predicates;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use algebra::{
    direct_product, has_identity, has_unique_inverses, inverse_of, is_associative,
    is_commutative, is_group, CayleyTable, Element, ElementOrders, FiniteAlgebra,
};
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::AlgebraError;
pub use search::{
    find_isomorphism, find_subgroup, is_isomorphic, is_normal_subgroup, is_subgroup,
    subgroup_embeddings, AxiomFlags, SearchStrategy, TableEnumerator,
};
