//! Numeric types usable as bin boundaries.
//!
//! [`BinScalar`] is the only numeric abstraction the crate needs: ordering,
//! halo arithmetic, and a per-type default halo. Floats get a tolerance that
//! absorbs rounding noise at the domain edges; integers compare exactly and
//! get none.

use std::fmt;

// =============================================================================
// BinScalar
// =============================================================================

/// Numeric type usable as a bin boundary and as a classified value.
///
/// Implemented for `f32`, `f64` and all primitive integers.
pub trait BinScalar:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Additive identity.
    fn zero() -> Self;

    /// `self + rhs`. Integers saturate at the type bounds.
    fn saturating_add(self, rhs: Self) -> Self;

    /// `self - rhs`. Integers saturate at the type bounds.
    fn saturating_sub(self, rhs: Self) -> Self;

    /// Default halo for a boundary span (last boundary minus first).
    ///
    /// See [`default_halo`].
    fn default_halo(span: Self) -> Self;
}

macro_rules! impl_bin_scalar_float {
    ($($t:ty),* $(,)?) => {$(
        impl BinScalar for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            fn default_halo(span: Self) -> Self {
                if !span.is_finite() {
                    return 0.0;
                }
                let span = span.abs();
                // Spacing to the next representable value; at MAX step down instead.
                let next = <$t>::from_bits(span.to_bits() + 1);
                let ulp = if next.is_finite() {
                    next - span
                } else {
                    span - <$t>::from_bits(span.to_bits() - 1)
                };
                ulp.sqrt()
            }
        }
    )*};
}

macro_rules! impl_bin_scalar_int {
    ($($t:ty),* $(,)?) => {$(
        impl BinScalar for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline]
            fn default_halo(_span: Self) -> Self {
                0
            }
        }
    )*};
}

impl_bin_scalar_float!(f32, f64);
impl_bin_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Default Halo
// =============================================================================

/// Default halo for a boundary span.
///
/// - Floats: `sqrt(ulp(|span|))`, the square root of the machine epsilon at the
///   magnitude of the span. A non-finite span yields `0`.
/// - Integers: always `0`, comparisons are exact.
///
/// ```
/// use ordered_bins::default_halo;
///
/// assert_eq!(default_halo(1.0_f64), 2.0_f64.powi(-26));
/// assert_eq!(default_halo(100_i32), 0);
/// ```
#[inline]
pub fn default_halo<T: BinScalar>(span: T) -> T {
    T::default_halo(span)
}

/// Default halo for a boundary sequence: [`default_halo`] of `last - first`.
///
/// Returns `0` for an empty sequence.
pub fn default_halo_for<T: BinScalar>(boundaries: &[T]) -> T {
    match (boundaries.first(), boundaries.last()) {
        (Some(&first), Some(&last)) => T::default_halo(last.saturating_sub(first)),
        _ => T::zero(),
    }
}

// =============================================================================
// Tests
// =============================================================================
