// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple groups of Lie type, known only by their order.
//!
//! These have no table; they carry a name and the order given by the
//! classical formulas. Orders grow quickly, so the arithmetic is checked.

use num::integer::gcd;

use crate::algebra::FiniteAlgebra;
use crate::error::AlgebraError;

/// `q^(n(n-1)/2) * prod_{i=2..n} (q^i - sign^i) / gcd(n, q - sign)`, where
/// `sign` is `1` for the linear groups and `-1` for the unitary ones.
fn lie_type_order(family: &str, n: u32, q: u32, unitary: bool) -> Result<usize, AlgebraError> {
    let overflow = || AlgebraError::OrderOverflow {
        family: format!("{}({}, {})", family, n, q),
    };
    if n < 2 || q < 2 {
        return Err(AlgebraError::InvalidShape(format!(
            "{}({}, {}) needs n >= 2 and q >= 2",
            family, n, q
        )));
    }
    let exponent = u32::try_from(u64::from(n) * u64::from(n - 1) / 2).map_err(|_| overflow())?;
    let q = u128::from(q);
    let mut order = q.checked_pow(exponent).ok_or_else(overflow)?;
    for i in 2..=n {
        let power = q.checked_pow(i).ok_or_else(overflow)?;
        let factor = if unitary && i % 2 == 1 { power + 1 } else { power - 1 };
        order = order.checked_mul(factor).ok_or_else(overflow)?;
    }
    let centre = if unitary {
        gcd(u128::from(n), q + 1)
    } else {
        gcd(u128::from(n), q - 1)
    };
    usize::try_from(order / centre).map_err(|_| overflow())
}

/// The projective special linear group `PSL(n, q)` (Chevalley type `A_{n-1}`).
pub fn chevalley_a(n: u32, q: u32) -> Result<FiniteAlgebra, AlgebraError> {
    let order = lie_type_order("PSL", n, q, false)?;
    Ok(FiniteAlgebra::abstract_of_order(order, format!("PSL({}, {})", n, q)))
}

/// The projective special unitary group `PSU(n, q)` (Steinberg type `²A_{n-1}`).
pub fn steinberg_2a(n: u32, q: u32) -> Result<FiniteAlgebra, AlgebraError> {
    let order = lie_type_order("PSU", n, q, true)?;
    Ok(FiniteAlgebra::abstract_of_order(order, format!("PSU({}, {})", n, q)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::is_group;

    #[test]
    fn test_linear_orders() {
        assert_eq!(chevalley_a(2, 4).unwrap().order(), 60);
        assert_eq!(chevalley_a(2, 5).unwrap().order(), 60);
        assert_eq!(chevalley_a(2, 7).unwrap().order(), 168);
        assert_eq!(chevalley_a(3, 2).unwrap().order(), 168);
        assert_eq!(chevalley_a(3, 4).unwrap().order(), 20160);
    }

    #[test]
    fn test_unitary_orders() {
        assert_eq!(steinberg_2a(3, 3).unwrap().order(), 6048);
        assert_eq!(steinberg_2a(4, 2).unwrap().order(), 25920);
    }

    #[test]
    fn test_abstract_groups() {
        let psl = chevalley_a(2, 7).unwrap();
        assert_eq!(psl.name(), Some("PSL(2, 7)"));
        assert!(psl.table().is_none());
        assert!(!is_group(&psl));
    }

    #[test]
    fn test_overflow_and_bad_parameters() {
        assert!(matches!(
            chevalley_a(20, 1000),
            Err(AlgebraError::OrderOverflow { .. })
        ));
        assert!(matches!(chevalley_a(1, 5), Err(AlgebraError::InvalidShape(_))));
    }

    #[test]
    fn test_large_rank_overflows() {
        for n in [70_000, u32::MAX] {
            assert!(matches!(
                chevalley_a(n, 2),
                Err(AlgebraError::OrderOverflow { .. })
            ));
            assert!(matches!(
                steinberg_2a(n, 2),
                Err(AlgebraError::OrderOverflow { .. })
            ));
        }
    }
}
