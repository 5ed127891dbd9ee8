use std::{fmt, iter::FusedIterator, mem};

use log::{debug, trace};

use crate::{
    bucket_list::{self, BucketList},
    hash_fn::{HashFn, KeyHasher, hash_function_1},
    primes::{is_prime, next_prime},
};

/// Number of buckets used by [`ChainedHashMap::new`]
pub const DEFAULT_CAPACITY: usize = 11;

/// A hash map resolving collisions by separate chaining.
///
/// Every slot of the bucket array holds a [`BucketList`] of the entries hashing to it. The
/// number of buckets is always prime. Before each insertion the table doubles (rounded up to
/// the next prime) once the load factor reaches 1.0, so chains stay short on average.
///
/// Keys are strings and are hashed by a pluggable [`KeyHasher`]; the default strategy is
/// [`hash_function_1`].
///
/// Note: This implementation is not thread-safe and performs no synchronization.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V, H = HashFn> {
    /// One chain per slot; the length of this vector is the capacity
    buckets: Vec<BucketList<V>>,
    /// Number of distinct keys stored across all chains
    size: usize,
    /// Strategy mapping keys to slots
    hasher: H,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates a map with [`DEFAULT_CAPACITY`] buckets and [`hash_function_1`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map with at least `capacity` buckets, rounded up to a prime, hashing with
    /// [`hash_function_1`]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, hash_function_1)
    }
}

impl<V, H> ChainedHashMap<V, H>
where
    H: KeyHasher,
{
    /// Creates a map with [`DEFAULT_CAPACITY`] buckets and the given hash strategy
    #[must_use]
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates a map with the given hash strategy and at least `capacity` buckets.
    ///
    /// The capacity goes through [`next_prime`], so even requests (including 2) are bumped
    /// to the next odd prime.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self { buckets: fresh_buckets(next_prime(capacity)), size: 0, hasher }
    }

    /// Gets the slot for a key
    fn slot(&self, key: &str) -> usize {
        // Capacity is prime and therefore never zero.
        self.hasher.hash_key(key).checked_rem(self.buckets.len()).unwrap_or_default()
    }

    /// Returns the chain responsible for `key`
    fn bucket(&self, key: &str) -> Option<&BucketList<V>> {
        self.buckets.get(self.slot(key))
    }

    /// Returns the chain responsible for `key`, mutably
    fn bucket_mut(&mut self, key: &str) -> Option<&mut BucketList<V>> {
        let slot = self.slot(key);
        self.buckets.get_mut(slot)
    }

    /// Inserts or updates a key-value pair.
    ///
    /// Growth is checked before the entry is placed: when the load factor is already 1.0
    /// or more the table is resized to twice its capacity, and the new key is hashed
    /// against the grown table. Returns the previous value when the key was present.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        if self.table_load() >= 1.0 {
            self.resize_table(self.capacity().saturating_mul(2));
        }

        let key = key.into();
        let bucket = self.bucket_mut(&key)?;
        if let Some(slot) = bucket.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        bucket.insert(key, value);
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieves the value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key)?.get(key)
    }

    /// Retrieves a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.bucket_mut(key)?.get_mut(key)
    }

    /// Returns true if the map holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.bucket(key).is_some_and(|bucket| bucket.contains(key))
    }

    /// Removes the entry for `key`, returning its value. Absent keys are left alone.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = self.bucket_mut(key)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(removed)
    }

    /// Rebuilds the table with `new_capacity` buckets and rehashes every entry.
    ///
    /// A capacity of 0 is ignored. Prime requests are honored as is, including 2; anything
    /// else is rounded up with [`next_prime`]. Entries are re-put one by one, so the growth
    /// rule of [`put`](Self::put) still applies while rehashing: shrinking below the number
    /// of stored entries ends in the smallest grown table that holds them.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            trace!("ignoring resize to {new_capacity} buckets");
            return;
        }

        let target = if is_prime(new_capacity) { new_capacity } else { next_prime(new_capacity) };
        let old_capacity = self.capacity();
        let old_buckets = mem::replace(&mut self.buckets, fresh_buckets(target));
        let entries = self.size;
        self.size = 0;

        for (key, value) in old_buckets.into_iter().flatten() {
            self.put(key, value);
        }

        debug!(
            "resized table from {old_capacity} to {} buckets ({entries} entries rehashed)",
            self.capacity()
        );
    }
}

impl<V, H> ChainedHashMap<V, H> {
    /// Returns the number of entries in the map
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of buckets with an empty chain
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(BucketList::len).max().unwrap_or_default()
    }

    /// Returns the load factor, `len / capacity`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Drops every entry, keeping the current capacity
    pub fn clear(&mut self) {
        self.buckets = fresh_buckets(self.capacity());
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in slot order, then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), current: None, remaining: self.size }
    }

    /// Returns a snapshot of every key-value pair, in the order of [`iter`](Self::iter)
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }

    /// Returns the hash strategy of the map
    #[must_use]
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }
}

/// Builds `capacity` empty chains
fn fresh_buckets<V>(capacity: usize) -> Vec<BucketList<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, BucketList::new);
    buckets
}

impl<V: fmt::Display, H> fmt::Display for ChainedHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {bucket}")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, H> Extend<(K, V)> for ChainedHashMap<V, H>
where
    K: Into<String>,
    H: KeyHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, V, H> IntoIterator for &'a ChainedHashMap<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a [`ChainedHashMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Chains not yet visited
    buckets: std::slice::Iter<'a, BucketList<V>>,
    /// Chain currently being walked
    current: Option<bucket_list::Iter<'a, V>>,
    /// Entries left to yield
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
