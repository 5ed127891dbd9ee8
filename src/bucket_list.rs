//! Singly-linked list of key-value entries backing one hash table slot

use std::fmt;

/// A node in the chain
#[derive(Debug, Clone)]
struct Node<V> {
    /// The key of the entry
    key: String,
    /// The value associated with the key
    value: V,
    /// The next node in the chain
    next: Option<Box<Node<V>>>,
}

/// An ordered chain of entries hashing to the same slot.
///
/// New entries are pushed at the head, so iteration yields the most recently inserted key
/// first. Keys are not checked for uniqueness on [`insert`](Self::insert); the map does that
/// before calling it.
#[derive(Debug, Clone)]
pub struct BucketList<V> {
    /// First node of the chain
    head: Option<Box<Node<V>>>,
    /// Number of nodes in the chain
    len: usize,
}

impl<V> Default for BucketList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BucketList<V> {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Pushes a new entry at the head of the list
    pub fn insert(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { key, value, next }));
        self.len = self.len.saturating_add(1);
    }

    /// Returns the value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.iter().find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.key == key {
                return Some(&mut node.value);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Returns true if an entry for `key` exists
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key` and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let removed = cursor.take()?;
        *cursor = removed.next;
        self.len = self.len.saturating_sub(1);
        Some(removed.value)
    }

    /// Detaches the head entry
    pub fn pop_front(&mut self) -> Option<(String, V)> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len = self.len.saturating_sub(1);
        Some((node.key, node.value))
    }

    /// Number of entries in the list
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the entries from head to tail
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { next: self.head.as_deref() }
    }
}

impl<V> Drop for BucketList<V> {
    // Unlink iteratively so long chains don't recurse through `Box` drops.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<V: fmt::Display> fmt::Display for BucketList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("]")
    }
}

/// Borrowing iterator over a [`BucketList`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Node to yield next
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((node.key.as_str(), &node.value))
    }
}

impl<'a, V> IntoIterator for &'a BucketList<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`BucketList`] from head to tail
#[derive(Debug)]
pub struct IntoIter<V> {
    /// List being drained
    list: BucketList<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<V> IntoIterator for BucketList<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(entries: &[(&str, i32)]) -> BucketList<i32> {
        let mut list = BucketList::new();
        for &(key, value) in entries {
            list.insert(key.to_string(), value);
        }
        list
    }

    #[test]
    fn test_insert_pushes_at_head() {
        let list = list_of(&[("a", 1), ("b", 2), ("c", 3)]);
        let keys: Vec<&str> = list.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_get_and_contains() {
        let list = list_of(&[("a", 1), ("b", 2)]);
        assert_eq!(list.get("a"), Some(&1));
        assert_eq!(list.get("b"), Some(&2));
        assert_eq!(list.get("z"), None);
        assert!(list.contains("a"));
        assert!(!list.contains("z"));
    }

    #[test]
    fn test_get_mut() {
        let mut list = list_of(&[("a", 1), ("b", 2)]);
        if let Some(value) = list.get_mut("a") {
            *value += 10;
        }
        assert_eq!(list.get("a"), Some(&11));
        assert!(list.get_mut("z").is_none());
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = list_of(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        assert_eq!(list.remove("d"), Some(4)); // head
        assert_eq!(list.remove("b"), Some(2)); // middle
        assert_eq!(list.remove("a"), Some(1)); // tail
        assert_eq!(list.remove("a"), None);

        let keys: Vec<&str> = list.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut list: BucketList<i32> = BucketList::new();
        assert_eq!(list.remove("a"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let list = list_of(&[("a", 1), ("b", 2)]);
        let drained: Vec<(String, i32)> = list.into_iter().collect();
        assert_eq!(drained, vec![("b".to_string(), 2), ("a".to_string(), 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(BucketList::<i32>::new().to_string(), "[]");
        assert_eq!(list_of(&[("a", 1), ("b", 2)]).to_string(), "[b: 2 -> a: 1]");
    }

    #[test]
    fn test_long_chain_drops() {
        let mut list = BucketList::new();
        for i in 0..200_000 {
            list.insert(i.to_string(), i);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
