//! Key/value containers accepted by `equal_map`.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Read-only view of a key/value container.
pub trait Mapping {
    type Key;
    type Value;
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Iterates all entries. The order is whatever the container yields.
    fn entries(&self) -> Self::Entries<'_>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Entries<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}
