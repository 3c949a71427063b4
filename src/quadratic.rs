//! Quadratic sorts. Only useful as a sanity baseline on small inputs.

pub fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let current = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > current {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = current;
    }
}

pub fn selection_sort(data: &mut [i32]) {
    for i in 0..data.len() {
        let mut index_min = i;
        for j in i + 1..data.len() {
            if data[j] < data[index_min] {
                index_min = j;
            }
        }
        data.swap(i, index_min);
    }
}
