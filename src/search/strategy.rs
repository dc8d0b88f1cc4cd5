// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Which axioms an enumeration enforces, and how.

use std::fmt;

use crate::error::AlgebraError;

/// The axioms a [`TableEnumerator`](super::TableEnumerator) enforces.
///
/// The default enforces identity, invertibility and associativity, which
/// yields groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxiomFlags {
    pub enforce_identity: bool,
    pub enforce_invertibility: bool,
    pub enforce_associativity: bool,
    pub enforce_commutativity: bool,
}

impl AxiomFlags {
    pub const fn groups() -> Self {
        Self {
            enforce_identity: true,
            enforce_invertibility: true,
            enforce_associativity: true,
            enforce_commutativity: false,
        }
    }

    pub const fn loops() -> Self {
        Self {
            enforce_associativity: false,
            ..Self::groups()
        }
    }

    pub const fn monoids() -> Self {
        Self {
            enforce_invertibility: false,
            ..Self::groups()
        }
    }

    /// Associative tables without an identity. No strategy supports this.
    pub const fn semigroups() -> Self {
        Self {
            enforce_identity: false,
            enforce_invertibility: false,
            ..Self::groups()
        }
    }

    /// Commutative groups. No strategy supports this.
    pub const fn abelian_groups() -> Self {
        Self {
            enforce_commutativity: true,
            ..Self::groups()
        }
    }
}

impl Default for AxiomFlags {
    fn default() -> Self {
        Self::groups()
    }
}

impl fmt::Display for AxiomFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enforced: Vec<&str> = [
            (self.enforce_identity, "identity"),
            (self.enforce_invertibility, "invertibility"),
            (self.enforce_associativity, "associativity"),
            (self.enforce_commutativity, "commutativity"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if enforced.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", enforced.join(", "))
        }
    }
}

/// The supported combinations of [`AxiomFlags`].
///
/// Every strategy fixes element 0 as a two-sided identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Invertibility and associativity.
    Group,
    /// Invertibility only.
    Loop,
    /// Associativity only.
    Monoid,
    /// Identity only.
    UnitalMagma,
}

impl SearchStrategy {
    /// Select the strategy for `flags`.
    ///
    /// Fails with [`AlgebraError::NotImplemented`] when commutativity is
    /// enforced or identity is not.
    pub fn from_flags(flags: AxiomFlags) -> Result<Self, AlgebraError> {
        if flags.enforce_commutativity || !flags.enforce_identity {
            return Err(AlgebraError::NotImplemented(flags));
        }
        Ok(match (flags.enforce_invertibility, flags.enforce_associativity) {
            (true, true) => SearchStrategy::Group,
            (true, false) => SearchStrategy::Loop,
            (false, true) => SearchStrategy::Monoid,
            (false, false) => SearchStrategy::UnitalMagma,
        })
    }

    pub fn enforces_invertibility(self) -> bool {
        matches!(self, SearchStrategy::Group | SearchStrategy::Loop)
    }

    pub fn enforces_associativity(self) -> bool {
        matches!(self, SearchStrategy::Group | SearchStrategy::Monoid)
    }

    /// Whether every accepted table is a Latin square.
    pub fn is_latin(self) -> bool {
        self == SearchStrategy::Group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        assert_eq!(SearchStrategy::from_flags(AxiomFlags::default()), Ok(SearchStrategy::Group));
        assert_eq!(SearchStrategy::from_flags(AxiomFlags::loops()), Ok(SearchStrategy::Loop));
        assert_eq!(SearchStrategy::from_flags(AxiomFlags::monoids()), Ok(SearchStrategy::Monoid));
        let magmas = AxiomFlags {
            enforce_invertibility: false,
            enforce_associativity: false,
            ..AxiomFlags::groups()
        };
        assert_eq!(SearchStrategy::from_flags(magmas), Ok(SearchStrategy::UnitalMagma));
    }

    #[test]
    fn test_unsupported_flags() {
        for flags in [AxiomFlags::semigroups(), AxiomFlags::abelian_groups()] {
            assert_eq!(SearchStrategy::from_flags(flags), Err(AlgebraError::NotImplemented(flags)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(AxiomFlags::groups().to_string(), "identity, invertibility, associativity");
        assert_eq!(AxiomFlags::semigroups().to_string(), "associativity");
    }

    #[test]
    fn test_latin_only_for_groups() {
        assert!(SearchStrategy::Group.is_latin());
        assert!(!SearchStrategy::Loop.is_latin());
        assert!(SearchStrategy::Loop.enforces_invertibility());
        assert!(!SearchStrategy::Loop.enforces_associativity());
    }
}
