//! [`OrderedBins`]: classify values into bins delimited by ordered boundaries.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::config::{BinsConfig, BinsConfigBuilder, Edge};
use super::error::{ConfigError, RangeError, Side};
use super::scalar::{default_halo_for, BinScalar};

/// Index of the first valid bin.
const FIRST_BIN: isize = 0;

// =============================================================================
// OrderedBins
// =============================================================================

/// Immutable mapping from values to 0-based bin indices.
///
/// `N` strictly increasing boundaries define `N - 1` bins; bin `i` spans
/// `boundaries[i]..=boundaries[i + 1]`. The first and last boundaries always
/// belong to the first and last bin. Values on an interior boundary go to the
/// bin selected by the [`Edge`] policy.
///
/// Outside `[min, max]`:
/// - within the halo, values fold into the first/last bin
/// - beyond the halo, classification fails with [`RangeError`] or returns the
///   configured sentinel bin, per side
///
/// # Example
///
/// ```
/// use ordered_bins::{OrderedBins, RangeError};
///
/// let bins = OrderedBins::new([0, 1, 2, 3]).unwrap();
/// assert_eq!(bins.classify(0), Ok(0));
/// assert_eq!(bins.classify(1), Ok(1));
/// assert_eq!(bins.classify(3), Ok(2));
/// assert!(matches!(bins.classify(4), Err(RangeError::AboveRange { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BinsConfig<T>",
    into = "BinsConfig<T>",
    bound(
        serialize = "T: BinScalar + Serialize",
        deserialize = "T: BinScalar + Deserialize<'de>"
    )
)]
pub struct OrderedBins<T> {
    boundaries: Box<[T]>,
    edge: Edge,
    halo_below: T,
    halo_above: T,
    error_below: bool,
    error_above: bool,
    bin_below: isize,
    bin_above: isize,
    /// `min - halo_below`, saturating for integers.
    lower_limit: T,
    /// `max + halo_above`, saturating for integers.
    upper_limit: T,
}

impl<T: BinScalar> OrderedBins<T> {
    /// Start building bins. See [`BinsConfig`] for the defaults.
    pub fn builder() -> BinsConfigBuilder<T> {
        BinsConfig::builder()
    }

    /// Bins with every setting at its default.
    pub fn new(boundaries: impl Into<Vec<T>>) -> Result<Self, ConfigError> {
        Self::builder().boundaries(boundaries).build()
    }

    /// Bins with the same halo and error policy on both sides.
    ///
    /// Sentinels stay at their defaults (`-1` and `n_bins`).
    pub fn with_tolerance(
        boundaries: impl Into<Vec<T>>,
        tolerance: T,
        strict: bool,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .boundaries(boundaries)
            .halo_below(tolerance)
            .halo_above(tolerance)
            .error_below(strict)
            .error_above(strict)
            .build()
    }

    // -------------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------------

    /// Map `x` to its bin index.
    ///
    /// `x` has the boundary type. To classify fractional values against
    /// integral cut points, build float bins with an explicit zero halo:
    ///
    /// ```
    /// use ordered_bins::OrderedBins;
    ///
    /// let bins = OrderedBins::with_tolerance([0.0, 1.0, 2.0, 3.0], 0.0, true).unwrap();
    /// assert_eq!(bins.classify(0.5), Ok(0));
    /// assert!(bins.classify(-1e-12).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RangeError::BelowRange`] if `x < min - halo_below` and `error_below` is set
    /// - [`RangeError::AboveRange`] if `x > max + halo_above` and `error_above` is set
    /// - [`RangeError::Unordered`] if `x` does not compare with the boundaries (NaN)
    #[inline]
    pub fn classify(&self, x: T) -> Result<isize, RangeError<T>> {
        let (Some(vs_min), Some(vs_max)) =
            (x.partial_cmp(&self.min()), x.partial_cmp(&self.max()))
        else {
            return Err(RangeError::Unordered(x));
        };

        if vs_min != Ordering::Greater {
            if x >= self.lower_limit {
                Ok(FIRST_BIN)
            } else if self.error_below {
                Err(RangeError::BelowRange {
                    value: x,
                    limit: self.lower_limit,
                })
            } else {
                tracing::trace!(
                    value = %x,
                    bin = self.bin_below,
                    "below range, returning sentinel"
                );
                Ok(self.bin_below)
            }
        } else if vs_max != Ordering::Less {
            if x <= self.upper_limit {
                Ok(self.last_bin())
            } else if self.error_above {
                Err(RangeError::AboveRange {
                    value: x,
                    limit: self.upper_limit,
                })
            } else {
                tracing::trace!(
                    value = %x,
                    bin = self.bin_above,
                    "above range, returning sentinel"
                );
                Ok(self.bin_above)
            }
        } else {
            Ok(self.search_bin(x))
        }
    }

    /// Binary search for a strictly interior value.
    ///
    /// `min < x < max`, so at least one boundary precedes `x` and the count is >= 1.
    #[inline]
    fn search_bin(&self, x: T) -> isize {
        let preceding = match self.edge {
            Edge::Right => self.boundaries.partition_point(|b| *b <= x),
            Edge::Left => self.boundaries.partition_point(|b| *b < x),
        };
        preceding as isize - 1
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// Indices [`classify`](Self::classify) can return.
    ///
    /// `first_bin()..=last_bin()`, widened to cover the sentinel of every side
    /// that does not error.
    ///
    /// Sentinels are not checked against their side, so the range is the hull
    /// of all candidates rather than `bin_below..=bin_above`: a `bin_below` of
    /// `10` yields `0..=10`, not the empty `10..=last_bin()`.
    pub fn bin_range(&self) -> RangeInclusive<isize> {
        let mut low = FIRST_BIN;
        let mut high = self.last_bin();
        if !self.error_below {
            low = low.min(self.bin_below);
            high = high.max(self.bin_below);
        }
        if !self.error_above {
            low = low.min(self.bin_above);
            high = high.max(self.bin_above);
        }
        low..=high
    }

    /// Human-readable description; same as the `Display` output.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Lower and upper boundary of a valid bin.
    pub fn bin_edges(&self, bin: isize) -> Option<(T, T)> {
        let i = usize::try_from(bin).ok()?;
        let lower = *self.boundaries.get(i)?;
        let upper = *self.boundaries.get(i + 1)?;
        Some((lower, upper))
    }

    /// Boundaries, strictly increasing.
    #[inline]
    pub fn boundaries(&self) -> &[T] {
        &self.boundaries
    }

    /// Number of valid bins (boundaries - 1).
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Index of the first valid bin, always `0`.
    #[inline]
    pub fn first_bin(&self) -> isize {
        FIRST_BIN
    }

    /// Index of the last valid bin.
    #[inline]
    pub fn last_bin(&self) -> isize {
        self.boundaries.len() as isize - 2
    }

    /// First boundary.
    #[inline]
    pub fn min(&self) -> T {
        self.boundaries[0]
    }

    /// Last boundary.
    #[inline]
    pub fn max(&self) -> T {
        self.boundaries[self.boundaries.len() - 1]
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub fn halo_below(&self) -> T {
        self.halo_below
    }

    #[inline]
    pub fn halo_above(&self) -> T {
        self.halo_above
    }

    #[inline]
    pub fn error_below(&self) -> bool {
        self.error_below
    }

    #[inline]
    pub fn error_above(&self) -> bool {
        self.error_above
    }

    /// Sentinel returned below the halo (only when `error_below` is off).
    #[inline]
    pub fn bin_below(&self) -> isize {
        self.bin_below
    }

    /// Sentinel returned above the halo (only when `error_above` is off).
    #[inline]
    pub fn bin_above(&self) -> isize {
        self.bin_above
    }
}

// =============================================================================
// Validation
// =============================================================================

impl<T: BinScalar> TryFrom<BinsConfig<T>> for OrderedBins<T> {
    type Error = ConfigError;

    fn try_from(config: BinsConfig<T>) -> Result<Self, Self::Error> {
        let BinsConfig {
            boundaries,
            edge,
            halo_below,
            halo_above,
            error_below,
            error_above,
            bin_below,
            bin_above,
        } = config;

        let halo_below = halo_below.unwrap_or_else(|| default_halo_for(&boundaries));
        let halo_above = halo_above.unwrap_or(halo_below);
        check_halo(Side::Below, halo_below)?;
        check_halo(Side::Above, halo_above)?;

        if boundaries.len() < 2 {
            return Err(ConfigError::TooFewBoundaries {
                got: boundaries.len(),
            });
        }
        if let Some(index) = boundaries
            .windows(2)
            .position(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less))
        {
            return Err(ConfigError::NotIncreasing {
                index,
                prev: boundaries[index].to_string(),
                next: boundaries[index + 1].to_string(),
            });
        }

        let last_bin = boundaries.len() as isize - 2;
        let bin_below = bin_below.unwrap_or(FIRST_BIN - 1);
        let bin_above = bin_above.unwrap_or(last_bin + 1);
        let lower_limit = boundaries[0].saturating_sub(halo_below);
        let upper_limit = boundaries[boundaries.len() - 1].saturating_add(halo_above);

        tracing::debug!(
            n_bins = boundaries.len() - 1,
            %edge,
            %halo_below,
            %halo_above,
            error_below,
            error_above,
            "built ordered bins"
        );

        Ok(Self {
            boundaries: boundaries.into_boxed_slice(),
            edge,
            halo_below,
            halo_above,
            error_below,
            error_above,
            bin_below,
            bin_above,
            lower_limit,
            upper_limit,
        })
    }
}

fn check_halo<T: BinScalar>(side: Side, halo: T) -> Result<(), ConfigError> {
    match halo.partial_cmp(&T::zero()) {
        Some(Ordering::Greater | Ordering::Equal) => Ok(()),
        _ => Err(ConfigError::NegativeHalo {
            side,
            value: halo.to_string(),
        }),
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: BinScalar> fmt::Display for OrderedBins<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderedBins([")?;
        for (i, b) in self.boundaries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "]; edge={}", self.edge)?;
        write_side(f, Side::Below, self.halo_below, self.error_below, self.bin_below)?;
        write_side(f, Side::Above, self.halo_above, self.error_above, self.bin_above)?;
        f.write_str(")")
    }
}

fn write_side<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    side: Side,
    halo: T,
    error: bool,
    sentinel: isize,
) -> fmt::Result {
    if error {
        write!(f, ", {side}: halo={halo} error")
    } else {
        write!(f, ", {side}: halo={halo} bin={sentinel}")
    }
}

// =============================================================================
// Tests
// =============================================================================
