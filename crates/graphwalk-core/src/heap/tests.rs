use super::*;

/// Deterministic pseudo-random sequence so the interleaving tests stay stable
fn lcg_sequence(seed: u64, len: usize) -> Vec<i64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 1000) as i64 - 500
        })
        .collect()
}

#[test]
fn test_index_helpers_are_zero_based() {
    assert_eq!(left(0), 1);
    assert_eq!(right(0), 2);
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(left(3), 7);
    assert_eq!(right(3), 8);
    assert_eq!(parent(8), 3);
}

#[test]
fn test_pop_empty_returns_none() {
    let mut heap: MinHeap<i32> = MinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.pop_min(), None);
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_single_element_pops_cleanly() {
    let mut heap = MinHeap::new();
    heap.add(42);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.pop_min(), Some(42));
    assert!(heap.is_empty());
    assert_eq!(heap.pop_min(), None);
}

#[test]
fn test_min_heap_root_is_smallest() {
    let mut heap = MinHeap::new();
    for value in [15, 3, 9, 1, 27, 4] {
        heap.add(value);
        assert!(heap.is_valid());
    }
    assert_eq!(heap.peek(), Some(&1));
}

#[test]
fn test_min_heap_pops_non_decreasing() {
    let values = lcg_sequence(7, 200);
    let heap: MinHeap<i64> = values.iter().copied().collect();

    let sorted = heap.into_sorted_vec();
    let mut expected = values.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_invariant_holds_under_interleaving() {
    let values = lcg_sequence(99, 300);
    let mut heap = MinHeap::new();
    let mut last_popped: Option<i64> = None;

    for (i, value) in values.into_iter().enumerate() {
        heap.add(value);
        assert!(heap.is_valid());
        if i % 3 == 2 {
            let popped = heap.pop_min().unwrap();
            assert!(heap.is_valid());
            // The popped value is the minimum of what remains plus itself
            assert!(heap.iter().all(|v| *v >= popped));
            last_popped = Some(popped);
        }
    }
    assert!(last_popped.is_some());

    let mut previous = i64::MIN;
    while let Some(value) = heap.pop_min() {
        assert!(value >= previous);
        previous = value;
        assert!(heap.is_valid());
    }
}

#[test]
fn test_max_heap_pops_non_increasing() {
    let mut heap = MaxHeap::new();
    heap.extend([5, 1, 8, 3, 9, 2, 9]);
    assert!(heap.is_valid());

    let mut popped = Vec::new();
    while let Some(value) = heap.pop_max() {
        popped.push(value);
    }
    assert_eq!(popped, vec![9, 9, 8, 5, 3, 2, 1]);
}

#[test]
fn test_max_heap_with_two_children_sinks_to_larger() {
    // Root removal must swap with the larger child on either side
    let mut heap = MaxHeap::new();
    heap.extend([10, 4, 7, 1]);
    assert_eq!(heap.pop_max(), Some(10));
    assert_eq!(heap.peek(), Some(&7));
    assert!(heap.is_valid());
}

#[test]
fn test_custom_order_closure() {
    let mut heap = Heap::with_order(FnOrder(|a: &&str, b: &&str| a.len() < b.len()));
    heap.extend(["banana", "fig", "apple", "kiwi"]);

    assert_eq!(heap.pop(), Some("fig"));
    assert_eq!(heap.pop(), Some("kiwi"));
    assert_eq!(heap.pop(), Some("apple"));
    assert_eq!(heap.pop(), Some("banana"));
}

#[test]
fn test_duplicates_are_kept() {
    let mut heap = MinHeap::new();
    heap.extend([2, 2, 1, 1]);
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 2]);
}

#[test]
fn test_clear_empties_heap() {
    let mut heap: MinHeap<u8> = [3, 2, 1].into_iter().collect();
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop_min(), None);
}
