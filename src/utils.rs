//! Utility functions and traits for `ChainedHashMap`

use crate::{ChainedHashMap, KeyHasher};

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;
}

impl<V, H> HashMapExtensions<V> for ChainedHashMap<V, H>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Creates a `ChainedHashMap` with the given hash strategy from an iterator of key-value
/// pairs. Later pairs overwrite earlier ones with the same key.
pub fn from_pairs_with_hasher<K, V, H, I>(iter: I, hasher: H) -> ChainedHashMap<V, H>
where
    K: Into<String>,
    H: KeyHasher,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedHashMap::with_hasher(hasher);
    map.extend(iter);
    map
}
