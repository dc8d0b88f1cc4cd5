// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random groups by rejection sampling.
//!
//! Fill the free cells at random and keep the first table that is a group.
//! Only practical for very small orders.

use log::debug;
use rand::Rng;

use crate::algebra::{is_group, CayleyTable, FiniteAlgebra};
use crate::error::AlgebraError;

/// Attempt cap used by the command line.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// Draw random tables with the identity border until one is a group.
///
/// Fails with [`AlgebraError::SearchExhausted`] after `max_attempts` tables.
pub fn random_group<R: Rng>(
    order: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Result<FiniteAlgebra, AlgebraError> {
    if order == 0 {
        return Err(AlgebraError::InvalidShape("a group needs at least one element".to_string()));
    }
    let free = (order - 1) * (order - 1);
    for attempt in 1..=max_attempts {
        let cells: Vec<_> = (0..free).map(|_| rng.gen_range(0..order)).collect();
        let candidate = FiniteAlgebra::from_cayley(CayleyTable::with_identity_border(order, &cells));
        if is_group(&candidate) {
            debug!("random group of order {} after {} attempts", order, attempt);
            return Ok(candidate.with_name(format!("Random{}", order)));
        }
    }
    Err(AlgebraError::SearchExhausted {
        order,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_small_random_groups() {
        let mut rng = StdRng::seed_from_u64(7);
        for order in 1..=4 {
            let group = random_group(order, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
            assert_eq!(group.order(), order);
            assert!(is_group(&group));
        }
    }

    #[test]
    fn test_attempt_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_group(3, &mut rng, 0),
            Err(AlgebraError::SearchExhausted {
                order: 3,
                attempts: 0
            })
        );
    }
}
