// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named families of groups.
//!
//! The constructors here write tables directly, without searching. Each
//! result is named, so products and log lines read as `Z2 x Z3` rather than
//! as bare orders.
//!
//! [`Family`] parses short descriptions (`z:6`, `dih:4`, `klein`, `sym:3`,
//! `psl:2:7`, `psu:3:3`) for the command line.

pub mod formula;
pub mod random;

pub use formula::{chevalley_a, steinberg_2a};
pub use random::{random_group, DEFAULT_MAX_ATTEMPTS};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use itertools::{iproduct, Itertools};

use crate::algebra::{CayleyTable, Element, FiniteAlgebra};
use crate::error::AlgebraError;

/// Largest `n` accepted by [`dihedral`].
const MAX_DIHEDRAL: usize = 99;

fn from_cells(order: usize, cells: Vec<Element>, name: String) -> Result<FiniteAlgebra, AlgebraError> {
    Ok(FiniteAlgebra::from_cayley(CayleyTable::from_cells(order, cells)?).with_name(name))
}

/// The cyclic group of order `n`: `i·j = (i + j) mod n`.
pub fn cyclic(n: usize) -> Result<FiniteAlgebra, AlgebraError> {
    if n == 0 {
        return Err(AlgebraError::InvalidShape("cyclic group of order 0".to_string()));
    }
    let cells = iproduct!(0..n, 0..n).map(|(i, j)| (i + j) % n).collect();
    from_cells(n, cells, format!("Z{}", n))
}

/// Short name for [`cyclic`].
pub fn z(n: usize) -> Result<FiniteAlgebra, AlgebraError> {
    cyclic(n)
}

/// The dihedral group with `n` rotations, of order `2n` for `n >= 2`.
///
/// `Dih1` is `Z2` and `Dih2` is the Klein four-group. For `3 <= n < 100`
/// elements `0..n` are the rotations `a^i` and `n..2n` the reflections
/// `b·a^i`, with `a^n = b^2 = 1` and `a·b = b·a^-1`.
pub fn dihedral(n: usize) -> Result<FiniteAlgebra, AlgebraError> {
    let name = format!("Dih{}", n);
    match n {
        1 => Ok(cyclic(2)?.with_name(name)),
        2 => Ok(klein(4)?.with_name(name)),
        3..=MAX_DIHEDRAL => {
            let cells = iproduct!(0..2 * n, 0..2 * n)
                .map(|(x, y)| {
                    let (i, j) = (x % n, y % n);
                    let sum = (i + j) % n;
                    let difference = (n + j - i) % n;
                    match (x < n, y < n) {
                        (true, true) => sum,
                        (true, false) => n + difference,
                        (false, true) => n + sum,
                        (false, false) => difference,
                    }
                })
                .collect();
            from_cells(2 * n, cells, name)
        }
        _ => Err(AlgebraError::InvalidShape(format!(
            "dihedral groups are defined for 1 <= n <= {}, not {}",
            MAX_DIHEDRAL, n
        ))),
    }
}

/// The Klein four-group. Only `n = 4` exists.
pub fn klein(n: usize) -> Result<FiniteAlgebra, AlgebraError> {
    if n != 4 {
        return Err(AlgebraError::InvalidShape(format!("no Klein group of order {}", n)));
    }
    let cells = iproduct!(0..4, 0..4).map(|(i, j)| i ^ j).collect();
    from_cells(4, cells, "V4".to_string())
}

/// The symmetric group on `n` points, of order `n!`.
///
/// Elements are the permutations of `0..n` in lexicographic order, so `0`
/// is the identity, and `(p·q)(x) = p(q(x))`.
pub fn symmetric(n: usize) -> Result<FiniteAlgebra, AlgebraError> {
    if n == 0 {
        return Err(AlgebraError::InvalidShape("symmetric group on no points".to_string()));
    }
    let permutations: Vec<Vec<usize>> = (0..n).permutations(n).collect();
    let index: HashMap<&[usize], Element> = permutations
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_slice(), i))
        .collect();
    let mut cells = Vec::with_capacity(permutations.len() * permutations.len());
    for (p, q) in iproduct!(&permutations, &permutations) {
        let composed: Vec<usize> = q.iter().map(|&x| p[x]).collect();
        let product = index.get(composed.as_slice()).copied().ok_or_else(|| {
            AlgebraError::StructuralCorruption(format!("{:?} is not a permutation", composed))
        })?;
        cells.push(product);
    }
    from_cells(permutations.len(), cells, format!("S{}", n))
}

/// A named family member, parsed from a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// `z:N`
    Cyclic(usize),
    /// `dih:N`
    Dihedral(usize),
    /// `klein`
    Klein,
    /// `sym:N`
    Symmetric(usize),
    /// `psl:N:Q`
    Linear(u32, u32),
    /// `psu:N:Q`
    Unitary(u32, u32),
}

impl Family {
    /// Construct the algebra.
    pub fn build(self) -> Result<FiniteAlgebra, AlgebraError> {
        match self {
            Family::Cyclic(n) => cyclic(n),
            Family::Dihedral(n) => dihedral(n),
            Family::Klein => klein(4),
            Family::Symmetric(n) => symmetric(n),
            Family::Linear(n, q) => chevalley_a(n, q),
            Family::Unitary(n, q) => steinberg_2a(n, q),
        }
    }
}

impl FromStr for Family {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AlgebraError::UnknownFamily(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();
        let number = |text: &str| text.parse::<u32>().map_err(|_| unknown());
        let size = |text: &str| text.parse::<usize>().map_err(|_| unknown());
        match parts.as_slice() {
            ["z", n] => Ok(Family::Cyclic(size(n)?)),
            ["dih", n] => Ok(Family::Dihedral(size(n)?)),
            ["klein"] => Ok(Family::Klein),
            ["sym", n] => Ok(Family::Symmetric(size(n)?)),
            ["psl", n, q] => Ok(Family::Linear(number(n)?, number(q)?)),
            ["psu", n, q] => Ok(Family::Unitary(number(n)?, number(q)?)),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Cyclic(n) => write!(f, "z:{}", n),
            Family::Dihedral(n) => write!(f, "dih:{}", n),
            Family::Klein => write!(f, "klein"),
            Family::Symmetric(n) => write!(f, "sym:{}", n),
            Family::Linear(n, q) => write!(f, "psl:{}:{}", n, q),
            Family::Unitary(n, q) => write!(f, "psu:{}:{}", n, q),
        }
    }
}
