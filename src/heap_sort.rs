//! Array-backed binary max-heap and the heap sort built on it.
//!
//! Heap sort is the only strictly in-place algorithm in the crate: it needs no
//! auxiliary buffer. Worst case O(n log n), not stable.

#[inline(always)]
pub const fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline(always)]
pub const fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Caller guarantees `i > 0`.
#[inline(always)]
pub const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Restores the max-heap property for the subtree rooted at `i`, assuming both
/// child subtrees already satisfy it. Only indices below `end` belong to the heap.
pub fn sift_down(data: &mut [i32], mut i: usize, end: usize) {
    debug_assert!(end <= data.len());
    loop {
        let left = left_child(i);
        let right = right_child(i);
        let mut largest = i;
        if left < end && data[left] > data[largest] {
            largest = left;
        }
        if right < end && data[right] > data[largest] {
            largest = right;
        }
        if largest == i {
            return;
        }
        data.swap(i, largest);
        i = largest;
    }
}

pub fn heap_sort(data: &mut [i32]) {
    let n = data.len();
    // parent(n - 1) underflows below two elements.
    if n < 2 {
        return;
    }

    // Build phase.
    for i in (0..=parent(n - 1)).rev() {
        sift_down(data, i, n);
    }

    // Extraction phase: move the max into the shrinking tail.
    let mut end = n - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end);
        end -= 1;
    }
}
