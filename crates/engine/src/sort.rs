//! Stable divide-and-conquer sort.
//!
//! Recursive merge sort: split at the midpoint, sort each half, merge by
//! taking the lesser element. On ties the left-half element is taken first,
//! which makes the sort **stable** — downstream multi-key rankings rely on
//! equal elements keeping their input order. O(n log n); the input slice is
//! never mutated.

use std::cmp::Ordering;

/// Sort `items` by `cmp` into a new vector.
pub fn merge_sort<T, F>(items: &[T], cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    // Sequences of length 0 or 1 are already sorted.
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], cmp);
    let right = merge_sort(&items[mid..], cmp);

    merge(&left, &right, cmp)
}

fn merge<T, F>(left: &[T], right: &[T], cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // Ties take the left element: stability.
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    // One side may still have a sorted tail; append it whole.
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
