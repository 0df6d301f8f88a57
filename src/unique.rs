//! Per-file accumulator of distinct accepted values.

use rustc_hash::FxHashSet;

/// Distinct values seen in one input file. Iteration order is unspecified;
/// [`crate::merge_sort::merge_sort`] puts the values in order afterwards.
#[derive(Debug, Default, Clone)]
pub struct UniqueSet {
    values: FxHashSet<i64>,
}

impl UniqueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, value: i64) -> bool {
        self.values.insert(value)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Hand the values over in arbitrary order.
    pub fn into_vec(self) -> Vec<i64> {
        self.values.into_iter().collect()
    }
}

impl Extend<i64> for UniqueSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl FromIterator<i64> for UniqueSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = UniqueSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = UniqueSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 1);
        assert!(set.contains(3));
    }

    #[test]
    fn test_union_across_lines() {
        let lines: [&[i64]; 3] = [&[3, 3, 3], &[3], &[-1, 0, 3]];
        let mut set = UniqueSet::new();
        for line in lines {
            set.extend(line.iter().copied());
        }
        let mut values = set.into_vec();
        values.sort_unstable();
        assert_eq!(values, vec![-1, 0, 3]);
    }

    #[test]
    fn test_empty() {
        let set: UniqueSet = std::iter::empty().collect();
        assert!(set.is_empty());
        assert!(set.into_vec().is_empty());
    }
}
