//! Recursive top-down merge sort.
//!
//! Split at the midpoint, sort both halves, then merge by repeatedly taking
//! the smaller front element. On equal fronts the left element wins, which
//! keeps the sort stable. O(n log n) comparisons, one output buffer per merge.

use std::cmp::Ordering;

/// Sort ascending by `Ord`.
pub fn merge_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Sort with a comparator. Elements comparing `Equal` keep their input order.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(items, &mut compare)
}

fn sort_recursive<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mid = items.len() / 2;
    let right = items.split_off(mid);
    let left = sort_recursive(items, compare);
    let right = sort_recursive(right, compare);
    merge(left, right, compare)
}

/// Two-pointer merge of two sorted runs.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Strictly less only: ties go to the left run.
        let take_right = compare(r, l) == Ordering::Less;
        if take_right {
            out.extend(right.next());
        } else {
            out.extend(left.next());
        }
    }

    out.extend(left);
    out.extend(right);
    out
}

/// True if every element is strictly greater than its predecessor.
pub fn is_strictly_ascending<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(merge_sort(Vec::<i64>::new()), Vec::<i64>::new());
        assert_eq!(merge_sort(vec![42]), vec![42]);
    }

    #[test]
    fn test_all_equal() {
        assert_eq!(merge_sort(vec![7, 7, 7, 7, 7]), vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_sorted_and_reversed() {
        let sorted: Vec<i64> = (-20..20).collect();
        assert_eq!(merge_sort(sorted.clone()), sorted);

        let reversed: Vec<i64> = (-20..20).rev().collect();
        assert_eq!(merge_sort(reversed), sorted);
    }

    #[test]
    fn test_negatives_and_zero() {
        assert_eq!(
            merge_sort(vec![5, -10, 0, -1023, 1023, -1, 1]),
            vec![-1023, -10, -1, 0, 1, 5, 1023]
        );
    }

    #[test]
    fn test_odd_and_even_lengths() {
        assert_eq!(merge_sort(vec![2, 1]), vec![1, 2]);
        assert_eq!(merge_sort(vec![3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(merge_sort(vec![4, 3, 1, 2]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        let sorted = merge_sort_by(pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            sorted,
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn test_descending_comparator() {
        let sorted = merge_sort_by(vec![1, 3, 2], |a, b| b.cmp(a));
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn test_non_copy_elements() {
        let words: Vec<String> = ["pear", "apple", "fig"].iter().map(|s| s.to_string()).collect();
        assert_eq!(merge_sort(words), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_is_strictly_ascending() {
        assert!(is_strictly_ascending::<i64>(&[]));
        assert!(is_strictly_ascending(&[1]));
        assert!(is_strictly_ascending(&[-3, 0, 9]));
        assert!(!is_strictly_ascending(&[1, 1]));
        assert!(!is_strictly_ascending(&[2, 1]));
    }
}
