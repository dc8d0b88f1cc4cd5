// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cayley_search::families::Family;
use cayley_search::{Element, FiniteAlgebra};

/// Build a family member, panicking on bad parameters.
pub fn build(spec: &str) -> FiniteAlgebra {
    spec.parse::<Family>()
        .and_then(Family::build)
        .unwrap_or_else(|err| panic!("{}: {}", spec, err))
}

/// Rename the elements of `algebra` by `pi`: the result has
/// `result[π(i)][π(j)] == π(algebra[i][j])`.
pub fn relabel(algebra: &FiniteAlgebra, pi: &[Element]) -> FiniteAlgebra {
    let table = algebra.cayley().unwrap();
    let n = table.order();
    let mut rows = vec![vec![0; n]; n];
    for i in 0..n {
        for j in 0..n {
            rows[pi[i]][pi[j]] = pi[table.get(i, j)];
        }
    }
    FiniteAlgebra::from_table(rows).unwrap()
}

/// Whether `pi` carries `a` onto `b`.
pub fn is_isomorphism(a: &FiniteAlgebra, b: &FiniteAlgebra, pi: &[Element]) -> bool {
    let (ta, tb) = (a.cayley().unwrap(), b.cayley().unwrap());
    let n = ta.order();
    (0..n).all(|i| (0..n).all(|j| tb.get(pi[i], pi[j]) == pi[ta.get(i, j)]))
}

/// Small groups with a label for their isomorphism class.
pub const SMALL_GROUPS: &[(&str, &str)] = &[
    ("z:1", "1"),
    ("z:2", "C2"),
    ("dih:1", "C2"),
    ("z:4", "C4"),
    ("klein", "V4"),
    ("dih:2", "V4"),
    ("z:6", "C6"),
    ("dih:3", "S3"),
    ("sym:3", "S3"),
    ("z:8", "C8"),
    ("dih:4", "D4"),
];
