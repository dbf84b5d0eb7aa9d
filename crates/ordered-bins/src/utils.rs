//! Parallelism configuration for batch classification.

use rayon::prelude::*;

// =============================================================================
// Batch Execution Mode
// =============================================================================

/// How a batch of values is classified.
///
/// `Parallel` splits the batch across the rayon pool the call runs in;
/// `Sequential` classifies on the calling thread. Results come back in input
/// order either way. [`run_with_threads`] picks the mode and pool for a thread
/// count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    #[default]
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Mode for a requested thread count.
    ///
    /// `1` is sequential. `0` follows the current pool, which is sequential
    /// only when that pool has a single worker. Anything larger is parallel.
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        let single_worker = match n_threads {
            0 => rayon::current_num_threads() == 1,
            1 => true,
            _ => false,
        };
        if single_worker { Self::Sequential } else { Self::Parallel }
    }

    #[inline]
    pub fn is_parallel(self) -> bool {
        self == Self::Parallel
    }

    /// Apply `f` to each item and collect in input order.
    #[inline]
    pub(crate) fn maybe_par_map<T, B, I, F>(self, items: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        match self {
            Self::Parallel => items.into_par_iter().map(f).collect(),
            Self::Sequential => items.into_iter().map(f).collect(),
        }
    }
}

// =============================================================================
// Thread Pool Setup
// =============================================================================

/// Call `f` with the [`Parallelism`] for `n_threads`.
///
/// `0` runs `f` in the current pool and `1` on the calling thread. Larger
/// counts run `f` inside a dedicated pool of exactly that size, or
/// sequentially if the pool cannot be built.
///
/// # Example
///
/// ```
/// use ordered_bins::{run_with_threads, OrderedBins};
///
/// let bins = OrderedBins::new([0.0, 1.0, 2.0]).unwrap();
/// let values = vec![0.5, 1.5, 2.0];
/// let out = run_with_threads(2, |par| bins.classify_slice(&values, par)).unwrap();
/// assert_eq!(out, vec![0, 1, 1]);
/// ```
#[inline]
pub fn run_with_threads<T: Send>(n_threads: usize, f: impl FnOnce(Parallelism) -> T + Send) -> T {
    match Parallelism::from_threads(n_threads) {
        Parallelism::Sequential => f(Parallelism::Sequential),
        Parallelism::Parallel if n_threads == 0 => f(Parallelism::Parallel),
        Parallelism::Parallel => {
            match rayon::ThreadPoolBuilder::new().num_threads(n_threads).build() {
                Ok(pool) => pool.install(|| f(Parallelism::Parallel)),
                Err(err) => {
                    tracing::warn!(
                        n_threads,
                        error = %err,
                        "failed to build thread pool, running sequentially"
                    );
                    f(Parallelism::Sequential)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallelism_from_threads() {
        assert!(!Parallelism::from_threads(1).is_parallel()); // 1 = sequential
        assert!(Parallelism::from_threads(2).is_parallel()); // >1 = parallel
        assert!(Parallelism::from_threads(8).is_parallel());
    }

    #[test]
    fn test_parallelism_constants() {
        assert!(Parallelism::Parallel.is_parallel());
        assert!(!Parallelism::Sequential.is_parallel());
        assert_eq!(Parallelism::default(), Parallelism::Sequential);
    }

    #[test]
    fn test_run_with_threads_sequential() {
        let result = run_with_threads(1, |par| (par, 42));
        assert_eq!(result, (Parallelism::Sequential, 42));
    }

    #[test]
    fn test_run_with_threads_auto() {
        let result = run_with_threads(0, |_| 42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_run_with_threads_explicit() {
        let result = run_with_threads(2, |_| rayon::current_num_threads());
        assert_eq!(result, 2);
    }

    #[test]
    fn test_maybe_par_map_preserves_order() {
        let result: Vec<_> = Parallelism::Sequential.maybe_par_map(0..5usize, |i| i * 2);
        assert_eq!(result, vec![0, 2, 4, 6, 8]);

        let result: Vec<_> = Parallelism::Parallel.maybe_par_map(0..1000usize, |i| i * 2);
        assert_eq!(result, (0..1000).map(|i| i * 2).collect::<Vec<_>>());
    }
}
