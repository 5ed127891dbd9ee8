//! Frequency mode of a sequence, counted with a `ChainedHashMap`

use crate::ChainedHashMap;

/// The most frequent items of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    /// Items tied for the highest frequency, in map iteration order
    pub keys: Vec<String>,
    /// How often each of `keys` occurs
    pub frequency: usize,
}

/// Computes the mode(s) of `items` and their frequency.
///
/// The order of tied keys follows the map's slot order and is not the input order. The
/// frequency floor is 1: when every item is unique all of them are returned, and an empty
/// input yields no keys with a frequency of 1.
///
/// ```rust
/// use chainmap::find_mode;
///
/// let mode = find_mode(["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(mode.keys, vec!["apple".to_string()]);
/// assert_eq!(mode.frequency, 2);
/// ```
pub fn find_mode<I>(items: I) -> Mode
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: ChainedHashMap<usize> = ChainedHashMap::new();
    for item in items {
        let item = item.as_ref();
        if let Some(count) = counts.get_mut(item) {
            *count = count.saturating_add(1);
        } else {
            counts.put(item, 1);
        }
    }

    let mut mode = Mode { keys: Vec::new(), frequency: 1 };
    for (key, &count) in &counts {
        if count > mode.frequency {
            mode.keys.clear();
            mode.keys.push(key.to_owned());
            mode.frequency = count;
        } else if count == mode.frequency {
            mode.keys.push(key.to_owned());
        }
    }
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut keys: Vec<String>) -> Vec<String> {
        keys.sort();
        keys
    }

    #[test]
    fn test_single_mode() {
        let mode = find_mode(["apple", "apple", "grape", "melon", "peach"]);
        assert_eq!(mode.keys, vec!["apple"]);
        assert_eq!(mode.frequency, 2);
    }

    #[test]
    fn test_single_mode_at_the_end() {
        let mode = find_mode([
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
        ]);
        assert_eq!(sorted(mode.keys), vec!["Mint", "Ubuntu"]);
        assert_eq!(mode.frequency, 3);
    }

    #[test]
    fn test_all_unique() {
        let mode = find_mode(["one", "two", "three", "four", "five"]);
        assert_eq!(sorted(mode.keys), vec!["five", "four", "one", "three", "two"]);
        assert_eq!(mode.frequency, 1);
    }

    #[test]
    fn test_three_way_tie() {
        let mode =
            find_mode(["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"]);
        assert_eq!(sorted(mode.keys), vec!["2", "3", "4"]);
        assert_eq!(mode.frequency, 3);
    }

    #[test]
    fn test_empty_input() {
        let mode = find_mode(Vec::<String>::new());
        assert!(mode.keys.is_empty());
        assert_eq!(mode.frequency, 1);
    }

    #[test]
    fn test_owned_strings_past_growth() {
        let items: Vec<String> = (0..500).map(|i| format!("item{}", i % 40)).collect();
        let mode = find_mode(&items);
        assert_eq!(mode.keys.len(), 20);
        assert_eq!(mode.frequency, 13);
    }
}
