//! Classifying many values at once.
//!
//! Batch results are identical for sequential and parallel execution: output
//! order follows input order and the reported error is the one for the
//! earliest failing value.

use ndarray::{Array1, ArrayView1};

use super::error::RangeError;
use super::ordered::OrderedBins;
use super::scalar::BinScalar;
use crate::utils::Parallelism;

impl<T: BinScalar> OrderedBins<T> {
    /// Classify every value of a slice.
    ///
    /// # Errors
    ///
    /// The [`RangeError`] of the first value (in input order) that fails.
    pub fn classify_slice(
        &self,
        values: &[T],
        parallelism: Parallelism,
    ) -> Result<Vec<isize>, RangeError<T>> {
        parallelism
            .maybe_par_map(values, |&x| self.classify(x))
            .into_iter()
            .collect()
    }

    /// Classify every value of a 1-D array view.
    ///
    /// Non-contiguous views are copied before classification.
    pub fn classify_array(
        &self,
        values: ArrayView1<'_, T>,
        parallelism: Parallelism,
    ) -> Result<Array1<isize>, RangeError<T>> {
        let bins = match values.as_slice() {
            Some(slice) => self.classify_slice(slice, parallelism)?,
            None => self.classify_slice(&values.to_vec(), parallelism)?,
        };
        Ok(Array1::from_vec(bins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s};

    fn bins() -> OrderedBins<f64> {
        OrderedBins::builder()
            .boundaries([0.0, 1.0, 2.0, 3.0])
            .error_above(false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_classify_slice_sequential_and_parallel_agree() {
        let bins = bins();
        let values: Vec<f64> = (0..300).map(|i| i as f64 * 0.0125).collect();
        let seq = bins.classify_slice(&values, Parallelism::Sequential).unwrap();
        let par = bins.classify_slice(&values, Parallelism::Parallel).unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq[0], 0);
        assert_eq!(*seq.last().unwrap(), 3); // 3.7375 -> sentinel above
    }

    #[test]
    fn test_classify_slice_reports_first_error() {
        let bins = bins();
        let values = [0.5, -1.0, 1.5, -2.0];
        for par in [Parallelism::Sequential, Parallelism::Parallel] {
            let err = bins.classify_slice(&values, par).unwrap_err();
            assert_eq!(err.value(), -1.0);
        }
    }

    #[test]
    fn test_classify_empty_slice() {
        let out = bins().classify_slice(&[], Parallelism::Parallel).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_classify_array_contiguous() {
        let values = array![0.0, 1.0, 2.5, 10.0];
        let out = bins().classify_array(values.view(), Parallelism::Sequential).unwrap();
        assert_eq!(out, array![0_isize, 1, 2, 3]);
    }

    #[test]
    fn test_classify_array_strided() {
        let values = array![0.0, 99.0, 1.0, 99.0, 2.5];
        let view = values.slice(s![..;2]);
        assert!(view.as_slice().is_none());
        let out = bins().classify_array(view, Parallelism::Parallel).unwrap();
        assert_eq!(out, array![0_isize, 1, 2]);
    }
}
