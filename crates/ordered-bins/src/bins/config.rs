//! Bins configuration with builder pattern.
//!
//! [`BinsConfig`] is the raw, serializable form of an [`OrderedBins`]: every
//! optional setting may be left unset and is resolved to its default during
//! validation. The builder is generated with `bon`; its `build()` finishes by
//! validating into an [`OrderedBins`].
//!
//! # Example
//!
//! ```
//! use ordered_bins::{Edge, OrderedBins};
//!
//! // All defaults: right edge, default halos, errors on both sides
//! let bins = OrderedBins::builder().boundaries([0.0, 1.0, 2.0, 3.0]).build().unwrap();
//! assert_eq!(bins.classify(1.0), Ok(1));
//!
//! // Left edge, tolerant below, sentinel above
//! let bins = OrderedBins::builder()
//!     .boundaries([0.0, 1.0, 2.0, 3.0])
//!     .edge(Edge::Left)
//!     .halo_below(0.5)
//!     .error_above(false)
//!     .build()
//!     .unwrap();
//! assert_eq!(bins.classify(-0.25), Ok(0));
//! assert_eq!(bins.classify(1.0), Ok(0));
//! assert_eq!(bins.classify(10.0), Ok(3));
//! ```

use std::fmt;
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::ordered::OrderedBins;
use super::scalar::BinScalar;

// =============================================================================
// Edge
// =============================================================================

/// Which bin owns a value that lands exactly on an interior boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// The bin whose *upper* edge is the boundary (`[a, b]` on the left side).
    Left,
    /// The bin whose *lower* edge is the boundary (`[a, b)` bins).
    #[default]
    Right,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Edge {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ConfigError::InvalidEdge(s.to_string())),
        }
    }
}

// =============================================================================
// BinsConfig
// =============================================================================

/// Unvalidated configuration for [`OrderedBins`].
///
/// Unset fields take these defaults during validation:
///
/// | field        | default                                   |
/// |--------------|-------------------------------------------|
/// | `edge`       | [`Edge::Right`]                           |
/// | `halo_below` | [`default_halo_for`](crate::default_halo_for) of `boundaries` |
/// | `halo_above` | `halo_below`                              |
/// | `error_*`    | `true`                                    |
/// | `bin_below`  | first bin - 1 (`-1`)                      |
/// | `bin_above`  | last bin + 1 (number of bins)             |
///
/// Sentinel bins are only returned when the matching `error_*` flag is off.
/// They are not checked against the valid bin range.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
#[serde(deny_unknown_fields, bound(deserialize = "T: Deserialize<'de>"))]
pub struct BinsConfig<T> {
    /// Strictly increasing boundaries, at least two.
    #[builder(into)]
    pub boundaries: Vec<T>,

    /// Tie-breaking for values on interior boundaries. Default: `Right`.
    #[builder(default)]
    #[serde(default)]
    pub edge: Edge,

    /// Tolerance below the first boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo_below: Option<T>,

    /// Tolerance above the last boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo_above: Option<T>,

    /// Fail on values below the halo instead of returning `bin_below`.
    #[builder(default = true)]
    #[serde(default = "default_true")]
    pub error_below: bool,

    /// Fail on values above the halo instead of returning `bin_above`.
    #[builder(default = true)]
    #[serde(default = "default_true")]
    pub error_above: bool,

    /// Sentinel returned below the halo when `error_below` is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_below: Option<isize>,

    /// Sentinel returned above the halo when `error_above` is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_above: Option<isize>,
}

fn default_true() -> bool {
    true
}

/// Custom finishing function that validates the config.
impl<T: BinScalar, S: bins_config_builder::IsComplete> BinsConfigBuilder<T, S> {
    /// Build and validate the bins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - a halo is negative or NaN
    /// - fewer than 2 boundaries are given
    /// - boundaries are not strictly increasing
    pub fn build(self) -> Result<OrderedBins<T>, ConfigError> {
        OrderedBins::try_from(self.__build_internal())
    }
}

impl<T: BinScalar> BinsConfig<T> {
    /// Validate into [`OrderedBins`].
    pub fn validate(self) -> Result<OrderedBins<T>, ConfigError> {
        OrderedBins::try_from(self)
    }
}

impl<T: BinScalar> From<OrderedBins<T>> for BinsConfig<T> {
    /// Fully resolved configuration; every optional field is set.
    fn from(bins: OrderedBins<T>) -> Self {
        Self {
            boundaries: bins.boundaries().to_vec(),
            edge: bins.edge(),
            halo_below: Some(bins.halo_below()),
            halo_above: Some(bins.halo_above()),
            error_below: bins.error_below(),
            error_above: bins.error_above(),
            bin_below: Some(bins.bin_below()),
            bin_above: Some(bins.bin_above()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
