//! Preparing boundary sequences.

use std::cmp::Ordering;

/// Strictly increasing subsequence of `values`, picked greedily left to right.
///
/// An element is kept when it is strictly greater than the last kept element
/// (the first element is always kept). Everything else is dropped, including
/// values that do not compare (NaN). The input is not sorted, so pass sorted
/// data if the result should cover every distinct value.
///
/// ```
/// use ordered_bins::make_increasing;
///
/// assert_eq!(make_increasing(&[1, 1, 2, 1, 3]), vec![1, 2, 3]);
/// assert_eq!(make_increasing(&[0.0, 0.5, 0.5, 1.0]), vec![0.0, 0.5, 1.0]);
/// ```
pub fn make_increasing<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        let keep = out
            .last()
            .is_none_or(|last| value.partial_cmp(last) == Some(Ordering::Greater));
        if keep {
            out.push(value.clone());
        }
    }
    out
}
