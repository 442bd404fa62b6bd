//! Search and sort routines timed by the trial runner.
//!
//! Every routine takes a key-extraction closure instead of requiring the
//! element type to implement an ordering trait, so the same code runs over
//! `Record`, `&Record` or plain keys.

/// Scans left to right and returns the index of the first element whose key
/// equals `target`. O(n).
pub fn linear_search<T, K, F>(seq: &[T], target: K, key_of: F) -> Option<usize>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    for (i, item) in seq.iter().enumerate() {
        if key_of(item) == target {
            return Some(i);
        }
    }
    None
}

/// Midpoint-halving search. O(log n).
///
/// `seq` must be sorted ascending by `key_of`. This is not checked: the
/// routine sits inside a timed phase. On an unsorted input the result is
/// unspecified (but never out of bounds).
///
/// With duplicate keys any matching index may be returned.
pub fn binary_search<T, K, F>(seq: &[T], target: K, key_of: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut lo = 0;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match key_of(&seq[mid]).cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}

/// In-place insertion sort. O(n^2).
///
/// Each element moves left past every preceding element that is not strictly
/// less than it, so `less` must be a strict order (`<`, never `<=`). The
/// passed-over run is shifted right by one slot and the element is written
/// once into the gap.
pub fn insertion_sort_by<T, F>(seq: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && !less(&seq[j - 1], &seq[i]) {
            j -= 1;
        }
        seq[j..=i].rotate_right(1);
    }
}

/// Baseline sort: the standard library's unstable sort (pattern-defeating
/// quicksort, an introsort descendant).
pub fn library_sort_by_key<T, K, F>(seq: &mut [T], key_of: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    seq.sort_unstable_by(|a, b| key_of(a).cmp(&key_of(b)));
}

pub fn is_sorted_by_key<T, K, F>(seq: &[T], key_of: F) -> bool
where
    K: Ord,
    F: Fn(&T) -> K,
{
    seq.windows(2).all(|w| key_of(&w[0]) <= key_of(&w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(x: &u32) -> u32 {
        *x
    }

    #[test]
    fn test_linear_search_returns_first_match() {
        let data = [4, 7, 1, 7, 9];
        assert_eq!(linear_search(&data, 7, ident), Some(1));
        assert_eq!(linear_search(&data, 9, ident), Some(4));
        assert_eq!(linear_search(&data, 5, ident), None);
    }

    #[test]
    fn test_linear_search_empty() {
        let data: [u32; 0] = [];
        assert_eq!(linear_search(&data, 1, ident), None);
    }

    #[test]
    fn test_binary_search_edges() {
        let data = [1, 3, 5, 7, 9, 11];
        assert_eq!(binary_search(&data, 1, ident), Some(0));
        assert_eq!(binary_search(&data, 11, ident), Some(5));
        assert_eq!(binary_search(&data, 0, ident), None);
        assert_eq!(binary_search(&data, 12, ident), None);
        assert_eq!(binary_search(&data, 4, ident), None);
    }

    #[test]
    fn test_binary_search_single_and_empty() {
        assert_eq!(binary_search(&[5u32], 5, ident), Some(0));
        assert_eq!(binary_search(&[5u32], 6, ident), None);
        let empty: [u32; 0] = [];
        assert_eq!(binary_search(&empty, 6, ident), None);
    }

    #[test]
    fn test_binary_search_duplicates_hits_some_match() {
        let data = [2, 2, 2, 2, 3];
        let idx = binary_search(&data, 2, ident).unwrap();
        assert_eq!(data[idx], 2);
    }

    #[test]
    fn test_insertion_sort_small_inputs() {
        let mut empty: Vec<u32> = vec![];
        insertion_sort_by(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut one = vec![3];
        insertion_sort_by(&mut one, |a, b| a < b);
        assert_eq!(one, vec![3]);
    }

    #[test]
    fn test_insertion_sort_reverse() {
        let mut data: Vec<u32> = (0..50).rev().collect();
        insertion_sort_by(&mut data, |a, b| a < b);
        assert_eq!(data, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_insertion_sort_with_duplicates() {
        let mut data = vec![5, 1, 5, 3, 1, 0, 5];
        insertion_sort_by(&mut data, |a, b| a < b);
        assert_eq!(data, vec![0, 1, 1, 3, 5, 5, 5]);
    }

    #[test]
    fn test_insertion_sort_moves_past_equal_keys() {
        // Equal keys are not "less", so a later element moves in front of them.
        let mut data = vec![(1, 'a'), (0, 'x'), (1, 'b'), (1, 'c')];
        insertion_sort_by(&mut data, |a, b| a.0 < b.0);
        assert_eq!(data, vec![(0, 'x'), (1, 'c'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn test_insertion_sort_already_sorted_keeps_order() {
        let mut data: Vec<(u32, usize)> = (0..20).map(|i| (i, i as usize)).collect();
        let before = data.clone();
        insertion_sort_by(&mut data, |a, b| a.0 < b.0);
        assert_eq!(data, before);
    }

    #[test]
    fn test_insertion_sort_by_key_closure() {
        let mut data = vec![("c", 3), ("a", 1), ("b", 2)];
        insertion_sort_by(&mut data, |a, b| a.1 < b.1);
        assert_eq!(data, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_library_sort_matches_insertion_sort() {
        let mut a = vec![9, 4, 4, 8, 1, 0, 7, 3];
        let mut b = a.clone();
        insertion_sort_by(&mut a, |x, y| x < y);
        library_sort_by_key(&mut b, ident);
        assert_eq!(a, b);
        assert!(is_sorted_by_key(&b, ident));
    }
}
