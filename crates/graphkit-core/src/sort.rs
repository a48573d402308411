//! Classic comparison sorts and binary search.
//!
//! These exist alongside the graph and table modules as reference
//! implementations with explicit loop structure, not as replacements for
//! [`slice::sort`]. All sorts are in place except [`merge_sort`], which
//! clones into an auxiliary buffer. [`bubble_sort`], [`insertion_sort`] and
//! [`merge_sort`] are stable; [`selection_sort`], [`quick_sort`] and
//! [`heap_sort`] are not.

/// Bubble sort with the adjacent-swap early exit: a pass with no swaps
/// proves the slice sorted, so nearly-sorted inputs finish in O(n).
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }
    for pass in 0..n - 1 {
        let mut swapped = false;
        for i in 0..n - 1 - pass {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort: repeatedly swaps the minimum of the unsorted suffix into
/// place. Always O(n^2) comparisons but at most n - 1 swaps.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for sorted_end in 0..n {
        let mut min_index = sorted_end;
        for i in sorted_end + 1..n {
            if items[i] < items[min_index] {
                min_index = i;
            }
        }
        if min_index != sorted_end {
            items.swap(sorted_end, min_index);
        }
    }
}

/// Insertion sort: shifts each element left past every larger neighbor.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Top-down merge sort. Stable; clones halves into auxiliary buffers.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);

    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();
    let mut l = 0;
    let mut r = 0;
    for slot in items.iter_mut() {
        // <= keeps equal elements in left-half order, which is what makes
        // the sort stable.
        if r >= right.len() || (l < left.len() && left[l] <= right[r]) {
            *slot = left[l].clone();
            l += 1;
        } else {
            *slot = right[r].clone();
            r += 1;
        }
    }
}

/// Quicksort with Lomuto partitioning around the last element.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }
    let pivot_index = lomuto_partition(items);
    quick_sort(&mut items[..pivot_index]);
    quick_sort(&mut items[pivot_index + 1..]);
}

/// Partitions around `items[n - 1]`, returning the pivot's final index.
fn lomuto_partition<T: Ord>(items: &mut [T]) -> usize {
    let pivot = items.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if items[i] <= items[pivot] {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, pivot);
    store
}

/// Heap sort: builds a max-heap in place, then repeatedly swaps the root to
/// the end of the shrinking heap.
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(items, root, n);
    }
    for end in (1..n).rev() {
        items.swap(0, end);
        sift_down(items, 0, end);
    }
}

/// Restores the max-heap property for the subtree at `root`, considering
/// only `items[..len]`.
fn sift_down<T: Ord>(items: &mut [T], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let right = left + 1;
        let mut largest = root;
        if items[left] > items[largest] {
            largest = left;
        }
        if right < len && items[right] > items[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        items.swap(root, largest);
        root = largest;
    }
}

/// Binary search over a sorted slice, returning the index of `target`.
///
/// Returns `None` when absent. With duplicates, any matching index may be
/// returned. The slice must be sorted ascending or the result is
/// meaningless.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    const SCRAMBLED: [u32; 7] = [64, 34, 25, 12, 22, 11, 90];
    const SORTED: [u32; 7] = [11, 12, 22, 25, 34, 64, 90];

    /// Every sort, as a (name, function) table the tests iterate over.
    fn all_sorts() -> Vec<(&'static str, fn(&mut [u32]))> {
        vec![
            ("bubble", bubble_sort::<u32>),
            ("selection", selection_sort::<u32>),
            ("insertion", insertion_sort::<u32>),
            ("merge", merge_sort::<u32>),
            ("quick", quick_sort::<u32>),
            ("heap", heap_sort::<u32>),
        ]
    }

    #[test]
    fn every_sort_orders_the_scrambled_fixture() {
        for (name, sort) in all_sorts() {
            let mut items = SCRAMBLED;
            sort(&mut items);
            assert_eq!(items, SORTED, "{name} sort");
        }
    }

    #[test]
    fn every_sort_handles_degenerate_inputs() {
        for (name, sort) in all_sorts() {
            let mut empty: [u32; 0] = [];
            sort(&mut empty);

            let mut single = [7u32];
            sort(&mut single);
            assert_eq!(single, [7], "{name} sort on one element");

            let mut pair = [2u32, 1];
            sort(&mut pair);
            assert_eq!(pair, [1, 2], "{name} sort on a pair");
        }
    }

    #[test]
    fn every_sort_is_idempotent_on_sorted_input() {
        for (name, sort) in all_sorts() {
            let mut items = SORTED;
            sort(&mut items);
            assert_eq!(items, SORTED, "{name} sort on sorted input");
        }
    }

    #[test]
    fn every_sort_handles_duplicates_and_reversal() {
        for (name, sort) in all_sorts() {
            let mut items = [5u32, 3, 5, 1, 3, 1, 5];
            sort(&mut items);
            assert_eq!(items, [1, 1, 3, 3, 5, 5, 5], "{name} sort");

            let mut reversed: Vec<u32> = (0..50).rev().collect();
            sort(&mut reversed);
            let expected: Vec<u32> = (0..50).collect();
            assert_eq!(reversed, expected, "{name} sort on reversed input");
        }
    }

    #[test]
    fn merge_sort_is_stable() {
        // Sort pairs by key only; payload order among equal keys must hold.
        #[derive(Clone, PartialEq, Eq, Debug)]
        struct Tagged(u32, char);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut items = vec![
            Tagged(2, 'a'),
            Tagged(1, 'b'),
            Tagged(2, 'c'),
            Tagged(1, 'd'),
        ];
        merge_sort(&mut items);
        assert_eq!(
            items,
            [Tagged(1, 'b'), Tagged(1, 'd'), Tagged(2, 'a'), Tagged(2, 'c')]
        );
    }

    #[test]
    fn binary_search_finds_every_present_element() {
        let items = SORTED;
        for (index, value) in items.iter().enumerate() {
            assert_eq!(binary_search(&items, value), Some(index));
        }
    }

    #[test]
    fn binary_search_misses_absent_elements() {
        let items = SORTED;
        for absent in [0u32, 13, 23, 100] {
            assert_eq!(binary_search(&items, &absent), None);
        }
        assert_eq!(binary_search::<u32>(&[], &5), None);
    }
}
