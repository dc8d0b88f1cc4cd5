// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The searches over finite algebras.
//!
//! Each search builds a predicate sequence for the [`SearchEngine`] and owns
//! its own [`SearchContext`]:
//!
//! - [`TableEnumerator`]: cells of a table, then the axiom filters
//! - [`find_isomorphism`]: a permutation pruned by element orders, then
//!   the product check
//! - [`subgroup_embeddings`]: an increasing choice of host elements, then
//!   the product check, optionally followed by the conjugation check of
//!   [`is_normal_subgroup`]
//!
//! Lazy sequences end their predicates with a suspension; each item is read
//! out of the context before the engine resumes.
//!
//! [`SearchEngine`]: crate::engine::SearchEngine
//! [`SearchContext`]: crate::context::SearchContext

pub mod enumerate;
pub mod isomorphism;
pub mod strategy;
pub mod subgroup;

pub use enumerate::{TableEnumerator, Tables};
pub use isomorphism::{find_isomorphism, is_isomorphic};
pub use strategy::{AxiomFlags, SearchStrategy};
pub use subgroup::{
    find_subgroup, is_normal_subgroup, is_subgroup, subgroup_embeddings, SubgroupEmbeddings,
};
