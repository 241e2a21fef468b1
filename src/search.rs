use serde::Serialize;

/// The three search strategies the harness can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchKind {
    Linear,
    BinaryIterative,
    BinaryRecursive,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Linear => "linear search",
            SearchKind::BinaryIterative => "binary search (iterative)",
            SearchKind::BinaryRecursive => "binary search (recursive)",
        }
    }

    /// Run this search over `data`. The binary variants require `data`
    /// sorted ascending; linear search works on anything.
    pub fn run(&self, data: &[i64], target: i64) -> Option<usize> {
        match self {
            SearchKind::Linear => linear_search(data, target),
            SearchKind::BinaryIterative => binary_search_iterative(data, target),
            SearchKind::BinaryRecursive => binary_search_recursive(data, target),
        }
    }
}

/// Left-to-right scan; first match wins.
pub fn linear_search(data: &[i64], target: i64) -> Option<usize> {
    data.iter().position(|&value| value == target)
}

/// Standard midpoint narrowing over a sorted ascending slice. Returns any
/// matching index, not necessarily the first.
pub fn binary_search_iterative(data: &[i64], target: i64) -> Option<usize> {
    let mut min: isize = 0;
    let mut max: isize = data.len() as isize - 1;

    while min <= max {
        let mid = (min + max) / 2;
        let value = data[mid as usize];
        if value == target {
            return Some(mid as usize);
        } else if value < target {
            min = mid + 1;
        } else {
            max = mid - 1;
        }
    }
    None
}

/// Recursive midpoint narrowing with explicit bounds.
pub fn binary_search_recursive(data: &[i64], target: i64) -> Option<usize> {
    search_between(data, target, 0, data.len() as isize - 1)
}

fn search_between(data: &[i64], target: i64, min: isize, max: isize) -> Option<usize> {
    if min > max {
        return None;
    }

    let mid = (min + max) / 2;
    let value = data[mid as usize];

    if value == target {
        Some(mid as usize)
    } else if value < target {
        search_between(data, target, mid + 1, max)
    } else {
        search_between(data, target, min, mid - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [i64; 7] = [1, 3, 3, 7, 9, 12, 40];

    fn all_kinds() -> [SearchKind; 3] {
        [
            SearchKind::Linear,
            SearchKind::BinaryIterative,
            SearchKind::BinaryRecursive,
        ]
    }

    #[test]
    fn finds_present_values() {
        for kind in all_kinds() {
            for &target in &SORTED {
                let position = kind.run(&SORTED, target);
                let index = position.unwrap_or_else(|| panic!("{} missed {target}", kind.label()));
                assert_eq!(SORTED[index], target);
            }
        }
    }

    #[test]
    fn reports_absent_values() {
        for kind in all_kinds() {
            assert_eq!(kind.run(&SORTED, 0), None);
            assert_eq!(kind.run(&SORTED, 8), None);
            assert_eq!(kind.run(&SORTED, 99), None);
        }
    }

    #[test]
    fn empty_input() {
        for kind in all_kinds() {
            assert_eq!(kind.run(&[], 5), None);
        }
    }

    #[test]
    fn linear_search_handles_unsorted_input() {
        let data = [9, 2, 7, 2, 5];
        assert_eq!(linear_search(&data, 7), Some(2));
        // First match wins on duplicates.
        assert_eq!(linear_search(&data, 2), Some(1));
        assert_eq!(linear_search(&data, 4), None);
    }

    #[test]
    fn single_element() {
        for kind in all_kinds() {
            assert_eq!(kind.run(&[5], 5), Some(0));
            assert_eq!(kind.run(&[5], 6), None);
        }
    }
}
