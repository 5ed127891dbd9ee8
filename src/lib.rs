//! # Chained Hash Map
//!
//! A Rust implementation of a hash table resolving collisions by separate chaining.
//!
//! This crate provides:
//!
//! - `ChainedHashMap`: a single-threaded map whose slots each hold a linked chain of entries
//! - `find_mode`: the most frequent item(s) of a sequence, counted with a `ChainedHashMap`
//!
//! The bucket array always has a prime number of slots. Keys are strings hashed by a
//! pluggable strategy (`KeyHasher`); two stock strategies are included, and any
//! `Fn(&str) -> usize` closure works as well. Before every insertion the table doubles
//! (to the next prime) once the load factor reaches 1.0.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map with 11 buckets
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Custom Hashing
//!
//! ```rust
//! use chainmap::{ChainedHashMap, hash_function_2};
//!
//! let mut map = ChainedHashMap::with_capacity_and_hasher(53, hash_function_2);
//! for i in 0..100 {
//!     map.put(format!("key{i}"), i);
//! }
//!
//! // 53 buckets filled up once, so the table grew to the next prime after 106
//! assert_eq!(map.capacity(), 107);
//! assert!(map.table_load() < 1.0);
//!
//! // Explicit resizes accept any positive size and round it up to a prime
//! map.resize_table(300);
//! assert_eq!(map.capacity(), 307);
//! assert_eq!(map.len(), 100);
//! ```

/// Singly-linked chain used as one hash table slot
pub mod bucket_list;
/// Module implementing the separately chained hash map
mod chained_hashmap;
/// Key hashing strategies
mod hash_fn;
/// Frequency mode built on the hash map
mod mode;
/// Prime sizing helpers
pub mod primes;
/// Utility functions and traits for the hash map
mod utils;

pub use bucket_list::BucketList;
pub use chained_hashmap::{ChainedHashMap, DEFAULT_CAPACITY, Iter};
pub use hash_fn::{HashFn, KeyHasher, hash_function_1, hash_function_2};
pub use mode::{Mode, find_mode};
pub use utils::{HashMapExtensions, from_pairs_with_hasher};
