/// Merges the sorted runs `data[begin..mid]` and `data[mid..end]` through
/// `buffer[begin..end]`, then copies the result back into `data`.
///
/// On equal keys the left run is taken first.
pub fn merge(data: &mut [i32], buffer: &mut [i32], begin: usize, mid: usize, end: usize) {
    let mut left = begin;
    let mut right = mid;
    for slot in &mut buffer[begin..end] {
        if left < mid && (right >= end || data[left] <= data[right]) {
            *slot = data[left];
            left += 1;
        } else {
            *slot = data[right];
            right += 1;
        }
    }
    data[begin..end].copy_from_slice(&buffer[begin..end]);
}

/// Sorts `data[begin..end]`. Requires `end > begin`.
fn split(data: &mut [i32], buffer: &mut [i32], begin: usize, end: usize) {
    if end - begin == 1 {
        return;
    }
    let mid = begin + (end - begin) / 2;
    split(data, buffer, begin, mid);
    split(data, buffer, mid, end);
    merge(data, buffer, begin, mid, end);
}

/// Top-down merge sort. One auxiliary buffer, shared by every level of the
/// recursion, is allocated per call.
pub fn merge_sort(data: &mut [i32]) {
    if data.is_empty() {
        return;
    }
    let mut buffer = vec![0i32; data.len()];
    split(data, &mut buffer, 0, data.len());
}
