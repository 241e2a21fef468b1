use serde::Serialize;

/// Pivot handling for the quicksort family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuickStrategy {
    /// In-place, middle pivot, crossing pointers.
    InPlace,
    /// Non-mutating, last-element pivot, explicit left/right buffers.
    Partitioned,
}

/// The sort algorithms the harness can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKind {
    Insertion,
    Bubble,
    Selection,
    Quick(QuickStrategy),
    Merge,
}

impl SortKind {
    /// The five algorithms the comparison run times side by side.
    pub const COMPARISON: [SortKind; 5] = [
        SortKind::Insertion,
        SortKind::Bubble,
        SortKind::Selection,
        SortKind::Quick(QuickStrategy::Partitioned),
        SortKind::Merge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKind::Insertion => "insertion sort",
            SortKind::Bubble => "bubble sort",
            SortKind::Selection => "selection sort",
            SortKind::Quick(QuickStrategy::InPlace) => "quick sort",
            SortKind::Quick(QuickStrategy::Partitioned) => "quick sort (partitioned)",
            SortKind::Merge => "merge sort",
        }
    }

    /// Sort `data` ascending. The allocating variants replace the vector's
    /// contents; the rest work in place.
    pub fn run(&self, data: &mut Vec<i64>) {
        match self {
            SortKind::Insertion => insertion_sort(data),
            SortKind::Bubble => bubble_sort(data),
            SortKind::Selection => selection_sort(data),
            SortKind::Quick(QuickStrategy::InPlace) => quick_sort(data),
            SortKind::Quick(QuickStrategy::Partitioned) => {
                *data = quick_sort_partitioned(data);
            }
            SortKind::Merge => *data = merge_sort(data),
        }
    }
}

/// Stable insertion sort; shifts elements right until the key fits.
pub fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Bubble sort with the early exit: a pass without swaps means sorted.
pub fn bubble_sort(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort by repeated minimum extraction.
pub fn selection_sort(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            data.swap(i, min_index);
        }
    }
}

/// In-place quicksort around the middle element.
pub fn quick_sort(data: &mut [i64]) {
    if data.len() > 1 {
        quick(data, 0, data.len() as isize - 1);
    }
}

fn quick(data: &mut [i64], left: isize, right: isize) {
    if left >= right {
        return;
    }

    let pivot = data[((left + right) / 2) as usize];
    let mut i = left;
    let mut j = right;

    while i <= j {
        while data[i as usize] < pivot {
            i += 1;
        }
        while data[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            data.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    quick(data, left, j);
    quick(data, i, right);
}

/// Quicksort that partitions around the last element into fresh buffers
/// and concatenates the sorted halves.
pub fn quick_sort_partitioned(data: &[i64]) -> Vec<i64> {
    let Some((&pivot, rest)) = data.split_last() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![pivot];
    }

    let mut left = Vec::new();
    let mut right = Vec::new();
    for &value in rest {
        if value < pivot {
            left.push(value);
        } else {
            right.push(value);
        }
    }

    let mut sorted = quick_sort_partitioned(&left);
    sorted.push(pivot);
    sorted.extend(quick_sort_partitioned(&right));
    sorted
}

/// Merge sort producing a new vector.
pub fn merge_sort(data: &[i64]) -> Vec<i64> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    merge(&merge_sort(&data[..mid]), &merge_sort(&data[mid..]))
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut l = 0;
    let mut r = 0;

    while l < left.len() && r < right.len() {
        if left[l] < right[r] {
            result.push(left[l]);
            l += 1;
        } else {
            result.push(right[r]);
            r += 1;
        }
    }

    result.extend_from_slice(&left[l..]);
    result.extend_from_slice(&right[r..]);
    result
}
