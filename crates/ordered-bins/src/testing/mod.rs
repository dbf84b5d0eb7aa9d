//! Seeded data generators for tests and benchmarks.

use rand::prelude::*;

use crate::bins::make_increasing;

/// Generate `n` random values uniform in `[min, max]`.
pub fn random_values(n: usize, seed: u64, min: f64, max: f64) -> Vec<f64> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    (0..n).map(|_| min + rng.r#gen::<f64>() * width).collect()
}

/// Generate a strictly increasing boundary sequence inside `[min, max]`.
///
/// Draws `n` values, sorts them and drops repeats, so the result may be
/// shorter than `n` (never longer). `min` and `max` are always included.
pub fn random_boundaries(n: usize, seed: u64, min: f64, max: f64) -> Vec<f64> {
    assert!(max > min);
    let mut values = random_values(n.saturating_sub(2), seed, min, max);
    values.push(min);
    values.push(max);
    values.sort_by(f64::total_cmp);
    make_increasing(&values)
}

/// Evenly spaced boundaries `min, min + step, ..., max` (`n_bins + 1` values).
pub fn uniform_boundaries(n_bins: usize, min: f64, max: f64) -> Vec<f64> {
    assert!(n_bins >= 1 && max > min);
    let step = (max - min) / n_bins as f64;
    (0..=n_bins)
        .map(|i| if i == n_bins { max } else { min + i as f64 * step })
        .collect()
}
