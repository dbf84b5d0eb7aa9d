//! Ordered bins: value-to-bin classification over sorted boundaries.
//!
//! # Overview
//!
//! - [`OrderedBins`]: validated, immutable bins with [`classify`](OrderedBins::classify)
//! - [`BinsConfig`]: raw (de)serializable configuration and its builder
//! - [`make_increasing`]: turn sorted data with repeats into valid boundaries
//! - [`default_halo`] / [`default_halo_for`]: default edge tolerance
//!
//! # Indexing
//!
//! Bin indices are 0-based `isize`. `N` boundaries give bins `0..=N-2`; the
//! default sentinels are `-1` below and `N-1` above. Add 1 for 1-based
//! numbering.
//!
//! # Classification
//!
//! ```text
//!   sentinel | halo |  0  |  1  | ... | N-2 | halo | sentinel
//!  ----------+------b0----b1----b2 ... bN-2--bN-1------+---------
//! ```
//!
//! Values inside a halo fold into the nearest valid bin; values beyond it fail
//! or return the sentinel, depending on the side's `error_*` flag.

mod batch;
mod config;
mod error;
mod increasing;
mod ordered;
mod scalar;

pub use config::{BinsConfig, BinsConfigBuilder, Edge};
pub use error::{ConfigError, RangeError, Side};
pub use increasing::make_increasing;
pub use ordered::OrderedBins;
pub use scalar::{default_halo, default_halo_for, BinScalar};
