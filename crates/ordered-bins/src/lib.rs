//! ordered-bins: map values to bins delimited by ordered boundaries.
//!
//! An [`OrderedBins`] holds a strictly increasing boundary sequence plus the
//! policies that decide what happens at its edges:
//!
//! - [`Edge`]: which bin owns a value exactly on an interior boundary
//! - halos: tolerance beyond the first/last boundary folded into the edge bins
//! - per-side errors or sentinel bins for values beyond the halos
//!
//! # Example
//!
//! ```
//! use ordered_bins::{make_increasing, Edge, OrderedBins};
//!
//! let raw = [0.0, 0.0, 1.0, 2.0, 2.0, 3.0];
//! let bins = OrderedBins::builder()
//!     .boundaries(make_increasing(&raw))
//!     .edge(Edge::Left)
//!     .halo_below(0.5)
//!     .error_below(false)
//!     .halo_above(2.0)
//!     .error_above(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bins.classify(-1.0), Ok(-1)); // sentinel below
//! assert_eq!(bins.classify(-0.5), Ok(0)); // halo
//! assert_eq!(bins.classify(2.0), Ok(1)); // left edge tie-break
//! assert_eq!(bins.classify(3.5), Ok(2)); // halo
//! assert_eq!(bins.classify(6.0), Ok(3)); // sentinel above
//! assert_eq!(bins.bin_range(), -1..=3);
//! ```
//!
//! # Batch Classification
//!
//! [`OrderedBins::classify_slice`] and [`OrderedBins::classify_array`] classify
//! many values, optionally in parallel (see [`Parallelism`]).

pub mod bins;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use bins::{
    default_halo, default_halo_for, make_increasing, BinScalar, BinsConfig, BinsConfigBuilder,
    ConfigError, Edge, OrderedBins, RangeError, Side,
};

pub use utils::{run_with_threads, Parallelism};
