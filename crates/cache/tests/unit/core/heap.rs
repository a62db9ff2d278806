//! Bounded Min-Heap Tests.
//!
//! Verifies the public contract of the heap backing LRU tracking:
//! - Ascending drain order regardless of insertion order
//! - Capacity enforcement with an explicit error value
//! - In-place re-prioritization in both directions

use waysim_core::core::MinHeap;
use waysim_core::core::heap::HeapFull;

// ══════════════════════════════════════════════════════════
// 1. Ordering
// ══════════════════════════════════════════════════════════

/// Pops come out in non-decreasing priority order.
#[test]
fn drains_in_priority_order() {
    let mut heap = MinHeap::with_capacity(16);
    for (value, priority) in [9_u32, 3, 14, 3, 0, 7, 11, 5].into_iter().enumerate() {
        heap.push(priority, value as u32).unwrap();
    }

    let mut previous = 0;
    let mut drained = 0;
    while let Some((priority, _)) = heap.pop_min() {
        assert!(priority >= previous, "priority {priority} after {previous}");
        previous = priority;
        drained += 1;
    }
    assert_eq!(drained, 8);
}

/// Re-inserting the minimum returns the same pair on the next pop.
#[test]
fn reinserted_minimum_stays_minimal() {
    let mut heap = MinHeap::with_capacity(8);
    heap.push(5, 50).unwrap();
    heap.push(2, 20).unwrap();
    heap.push(8, 80).unwrap();

    let min = heap.pop_min().unwrap();
    heap.push(min.0, min.1).unwrap();
    assert_eq!(heap.pop_min(), Some(min));
}

// ══════════════════════════════════════════════════════════
// 2. Capacity
// ══════════════════════════════════════════════════════════

#[test]
fn push_beyond_capacity_fails() {
    let mut heap = MinHeap::with_capacity(3);
    heap.push(1, 1).unwrap();
    heap.push(2, 2).unwrap();
    heap.push(3, 3).unwrap();
    assert_eq!(heap.push(4, 4), Err(HeapFull { capacity: 3 }));
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.capacity(), 3);
}

/// Popping frees a slot for a subsequent push.
#[test]
fn pop_frees_capacity() {
    let mut heap = MinHeap::with_capacity(1);
    heap.push(1, 1).unwrap();
    assert!(heap.push(2, 2).is_err());
    assert_eq!(heap.pop_min(), Some((1, 1)));
    assert!(heap.push(2, 2).is_ok());
}

#[test]
fn empty_heap_pops_none() {
    let mut heap = MinHeap::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.pop_min(), None);
}

// ══════════════════════════════════════════════════════════
// 3. Update
// ══════════════════════════════════════════════════════════

/// Raising the minimum's priority demotes it behind the others.
#[test]
fn update_demotes_former_minimum() {
    let mut heap = MinHeap::with_capacity(4);
    heap.push(0, 100).unwrap();
    heap.push(4, 200).unwrap();
    heap.push(5, 300).unwrap();

    heap.update(100, 15);
    let order: Vec<u32> = std::iter::from_fn(|| heap.pop_min().map(|(_, v)| v)).collect();
    assert_eq!(order, vec![200, 300, 100]);
}

/// Lowering a leaf's priority promotes it to the root.
#[test]
fn update_promotes_to_minimum() {
    let mut heap = MinHeap::with_capacity(4);
    heap.push(10, 100).unwrap();
    heap.push(20, 200).unwrap();
    heap.push(30, 300).unwrap();

    heap.update(300, 1);
    assert_eq!(heap.pop_min(), Some((1, 300)));
}
