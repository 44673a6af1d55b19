//! Small helpers over `HashMap`/`HashSet` shared by the registry and the models.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Collect a slice into a set, dropping duplicates.
#[must_use]
pub fn to_set<K: Eq + Hash + Clone>(items: &[K]) -> HashSet<K> {
    items.iter().cloned().collect()
}

/// Drop duplicates while keeping the first occurrence order.
#[must_use]
pub fn dedup<K: Eq + Hash + Clone>(items: impl IntoIterator<Item = K>) -> Vec<K> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Insert every key in `keys` with the same `value`, overwriting existing entries.
pub fn fill<K, V, S>(map: &mut HashMap<K, V, S>, keys: &[K], value: &V)
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    for key in keys {
        map.insert(key.clone(), value.clone());
    }
}
