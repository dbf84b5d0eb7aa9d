//! Error types for construction and classification.

use std::fmt;

/// Which end of the boundary sequence a setting or value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Below the first boundary.
    Below,
    /// Above the last boundary.
    Above,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below => f.write_str("below"),
            Self::Above => f.write_str("above"),
        }
    }
}

// =============================================================================
// ConfigError
// =============================================================================

/// Errors raised while validating a bins configuration.
///
/// Construction either fully succeeds or fails with one of these; no partially
/// built [`OrderedBins`](super::OrderedBins) is ever observable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Edge policy tag is neither `left` nor `right`.
    #[error("edge must be `left` or `right`, got `{0}`")]
    InvalidEdge(String),

    /// Halo must be non-negative (NaN is rejected as well).
    #[error("halo_{side} must be >= 0, got {value}")]
    NegativeHalo { side: Side, value: String },

    /// At least two boundaries are needed to delimit one bin.
    #[error("at least 2 boundaries are required, got {got}")]
    TooFewBoundaries { got: usize },

    /// Adjacent boundaries are equal, decreasing, or unordered.
    #[error(
        "boundaries must be strictly increasing, but boundaries[{index}] = {prev} \
         is not less than its successor {next}; \
         sort the input and filter it with `make_increasing` first"
    )]
    NotIncreasing {
        index: usize,
        prev: String,
        next: String,
    },
}

// =============================================================================
// RangeError
// =============================================================================

/// Errors raised while classifying a value.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RangeError<T> {
    /// Value is below the first boundary minus `halo_below`.
    #[error("value {value} is below the accepted range (lowest accepted value is {limit})")]
    BelowRange { value: T, limit: T },

    /// Value is above the last boundary plus `halo_above`.
    #[error("value {value} is above the accepted range (highest accepted value is {limit})")]
    AboveRange { value: T, limit: T },

    /// Value cannot be ordered against the boundaries (e.g. NaN).
    #[error("value {0} cannot be ordered against the bin boundaries")]
    Unordered(T),
}

impl<T: Copy> RangeError<T> {
    /// The value that failed to classify.
    pub fn value(&self) -> T {
        match *self {
            Self::BelowRange { value, .. } | Self::AboveRange { value, .. } => value,
            Self::Unordered(value) => value,
        }
    }

    /// Side the value fell off, if it was ordered at all.
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::BelowRange { .. } => Some(Side::Below),
            Self::AboveRange { .. } => Some(Side::Above),
            Self::Unordered(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_increasing_message_points_to_make_increasing() {
        let err = ConfigError::NotIncreasing {
            index: 0,
            prev: "3".into(),
            next: "2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("boundaries[0] = 3"));
        assert!(msg.contains("make_increasing"));
    }

    #[test]
    fn test_negative_halo_message_names_side() {
        let err = ConfigError::NegativeHalo {
            side: Side::Above,
            value: "-1".into(),
        };
        assert_eq!(err.to_string(), "halo_above must be >= 0, got -1");
    }

    #[test]
    fn test_range_error_accessors() {
        let below = RangeError::BelowRange { value: -1.0, limit: 0.0 };
        assert_eq!(below.value(), -1.0);
        assert_eq!(below.side(), Some(Side::Below));

        let above = RangeError::AboveRange { value: 4, limit: 3 };
        assert_eq!(above.value(), 4);
        assert_eq!(above.side(), Some(Side::Above));
        assert_eq!(
            above.to_string(),
            "value 4 is above the accepted range (highest accepted value is 3)"
        );

        let unordered = RangeError::Unordered(f64::NAN);
        assert!(unordered.value().is_nan());
        assert_eq!(unordered.side(), None);
    }
}
