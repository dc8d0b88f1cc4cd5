// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct products of finite algebras.

use itertools::iproduct;

use super::{CayleyTable, FiniteAlgebra};
use crate::error::AlgebraError;

/// The direct product `a × b`.
///
/// The pair `(u, v)` is encoded as `u + |a|·v`, so the identity pair
/// `(0, 0)` is element 0 again. Nothing is validated: the product of two
/// groups is a group, but that is the caller's concern.
pub fn direct_product(a: &FiniteAlgebra, b: &FiniteAlgebra) -> Result<FiniteAlgebra, AlgebraError> {
    let (ta, tb) = (a.cayley()?, b.cayley()?);
    let (n1, n2) = (ta.order(), tb.order());
    let n = n1 * n2;

    let mut cells = vec![0; n * n];
    for ((v, u), (x, w)) in iproduct!(iproduct!(0..n2, 0..n1), iproduct!(0..n2, 0..n1)) {
        cells[(u + n1 * v) * n + (w + n1 * x)] = ta.get(u, w) + n1 * tb.get(v, x);
    }

    let product = FiniteAlgebra::from_cayley(CayleyTable::from_cells(n, cells)?);
    Ok(match (a.name(), b.name()) {
        (Some(left), Some(right)) => product.with_name(format!("{} x {}", left, right)),
        _ => product,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::is_group;

    fn z2() -> FiniteAlgebra {
        FiniteAlgebra::from_table(vec![vec![0, 1], vec![1, 0]])
            .unwrap()
            .with_name("Z2")
    }

    #[test]
    fn test_z2_squared_is_klein() {
        let product = direct_product(&z2(), &z2()).unwrap();
        assert_eq!(product.name(), Some("Z2 x Z2"));
        assert_eq!(
            product.cayley().unwrap().to_rows(),
            vec![
                vec![0, 1, 2, 3],
                vec![1, 0, 3, 2],
                vec![2, 3, 0, 1],
                vec![3, 2, 1, 0],
            ]
        );
        assert!(is_group(&product));
    }

    #[test]
    fn test_product_with_trivial() {
        let trivial = FiniteAlgebra::from_table(vec![vec![0]]).unwrap();
        let product = direct_product(&trivial, &z2()).unwrap();
        assert_eq!(product.order(), 2);
        assert_eq!(product.name(), None);
        assert_eq!(product.cayley().unwrap(), z2().cayley().unwrap());
    }

    #[test]
    fn test_abstract_operand() {
        let result = direct_product(&z2(), &FiniteAlgebra::abstract_of_order(60, "A5"));
        assert!(matches!(result, Err(AlgebraError::MissingTable { .. })));
    }
}
