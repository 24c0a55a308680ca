//! The set of strategies produced by resolution.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::MultiTenancyStrategy;

/// A set of resolved multi-tenancy strategies.
///
/// Produced by [`resolve`](super::resolve). Elements are unique and iteration
/// order is deterministic, but order carries no meaning.
///
/// Resolution intends that the set is never empty and that
/// [`MultiTenancyStrategy::None`] never coexists with another strategy.
/// Neither property is enforced here: a comma-separated configuration value
/// can produce an empty or mixed set (see the resolution rules in
/// [`resolve`](super::resolve)), so the queries below are defined for those
/// shapes too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategySet(BTreeSet<MultiTenancyStrategy>);

impl StrategySet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        StrategySet(BTreeSet::new())
    }

    /// Creates a set containing a single strategy.
    pub fn only(strategy: MultiTenancyStrategy) -> Self {
        let mut set = BTreeSet::new();
        set.insert(strategy);
        StrategySet(set)
    }

    /// Adds a strategy. Returns `true` if it was not already present.
    pub fn insert(&mut self, strategy: MultiTenancyStrategy) -> bool {
        self.0.insert(strategy)
    }

    /// Returns `true` if the set contains the given strategy.
    pub fn contains(&self, strategy: MultiTenancyStrategy) -> bool {
        self.0.contains(&strategy)
    }

    /// Returns `true` if the set contains no strategies.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of strategies in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the strategies in the set.
    pub fn iter(&self) -> impl Iterator<Item = MultiTenancyStrategy> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if multi-tenancy is enabled.
    ///
    /// Multi-tenancy is considered on unless the set contains
    /// [`MultiTenancyStrategy::None`].
    pub fn enabled(&self) -> bool {
        !self.contains(MultiTenancyStrategy::None)
    }

    /// Returns `true` if any strategy in the set requires a specialized
    /// multi-tenant connection provider.
    ///
    /// True iff the set contains [`MultiTenancyStrategy::Database`] or
    /// [`MultiTenancyStrategy::Schema`].
    pub fn requires_multi_tenant_connection_provider(&self) -> bool {
        self.contains(MultiTenancyStrategy::Database)
            || self.contains(MultiTenancyStrategy::Schema)
    }
}

impl fmt::Display for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, strategy) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{strategy}")?;
        }
        write!(f, "}}")
    }
}

impl From<MultiTenancyStrategy> for StrategySet {
    fn from(strategy: MultiTenancyStrategy) -> Self {
        StrategySet::only(strategy)
    }
}

impl FromIterator<MultiTenancyStrategy> for StrategySet {
    fn from_iter<I: IntoIterator<Item = MultiTenancyStrategy>>(iter: I) -> Self {
        StrategySet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StrategySet {
    type Item = MultiTenancyStrategy;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, MultiTenancyStrategy>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
