//! Pluggable key hashing strategies for `ChainedHashMap`

/// Maps a string key to a non-negative integer.
///
/// The map reduces the result modulo its capacity, so implementations only need to be pure
/// and deterministic. Any `Fn(&str) -> usize` is a `KeyHasher`.
pub trait KeyHasher {
    /// Hashes `key`
    fn hash_key(&self, key: &str) -> usize;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> usize,
{
    fn hash_key(&self, key: &str) -> usize {
        self(key)
    }
}

/// Function pointer type of the stock hash strategies
pub type HashFn = fn(&str) -> usize;

/// Sums the code points of `key`.
///
/// Anagrams collide, which makes this the weaker of the two stock strategies.
#[must_use]
pub fn hash_function_1(key: &str) -> usize {
    key.chars().fold(0_usize, |hash, letter| hash.wrapping_add(letter as usize))
}

/// Sums the code points of `key`, each weighted by its 1-based position.
#[must_use]
pub fn hash_function_2(key: &str) -> usize {
    key.chars().enumerate().fold(0_usize, |hash, (index, letter)| {
        let weight = index.wrapping_add(1);
        hash.wrapping_add(weight.wrapping_mul(letter as usize))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function_1() {
        assert_eq!(hash_function_1(""), 0);
        assert_eq!(hash_function_1("a"), 97);
        assert_eq!(hash_function_1("ab"), 97 + 98);
        assert_eq!(hash_function_1("ab"), hash_function_1("ba"));
    }

    #[test]
    fn test_hash_function_2() {
        assert_eq!(hash_function_2(""), 0);
        assert_eq!(hash_function_2("a"), 97);
        assert_eq!(hash_function_2("ab"), 97 + 2 * 98);
        assert_ne!(hash_function_2("ab"), hash_function_2("ba"));
    }

    #[test]
    fn test_closure_is_a_hasher() {
        let constant = |_: &str| 7_usize;
        assert_eq!(constant.hash_key("anything"), 7);

        let stock: HashFn = hash_function_2;
        assert_eq!(stock.hash_key("ab"), hash_function_2("ab"));
    }
}
