//! Registry of access kinds an engine is allowed to reason about.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::UnknownAccess;
use crate::maps;

/// Immutable, de-duplicated set of recognised access kinds.
///
/// Fixed at construction. Iteration order is the first-seen order of the
/// accesses passed to [`AccessRegistry::new`], so the default access set is
/// stable across calls.
#[derive(Debug, Clone)]
pub struct AccessRegistry<A: Eq + Hash> {
    ordered: Vec<A>,
    members: HashSet<A>,
}

impl<A: Eq + Hash + Clone> AccessRegistry<A> {
    /// Build a registry from the given accesses. Duplicates collapse.
    #[must_use]
    pub fn new(accesses: impl IntoIterator<Item = A>) -> Self {
        let ordered = maps::dedup(accesses);
        let members = maps::to_set(&ordered);
        Self { ordered, members }
    }

    /// Resolve the access set for one resolution.
    ///
    /// An empty request means "every registered access". Otherwise each
    /// requested access must be registered; duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAccess`] carrying the first requested access that is
    /// not registered. No partial result is produced.
    pub fn validate(&self, requested: &[A]) -> Result<Vec<A>, UnknownAccess<A>> {
        if requested.is_empty() {
            return Ok(self.ordered.clone());
        }

        if let Some(unknown) = requested.iter().find(|a| !self.members.contains(*a)) {
            return Err(UnknownAccess(unknown.clone()));
        }

        Ok(maps::dedup(requested.iter().cloned()))
    }

    #[must_use]
    pub fn contains(&self, access: &A) -> bool {
        self.members.contains(access)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Registered accesses in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.ordered.iter()
    }
}
