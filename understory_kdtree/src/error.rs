// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by every point index backend.

/// Errors returned by [`PointIndex`](crate::PointIndex) operations.
///
/// Only argument validation can fail. Duplicate inserts, empty trees, and
/// empty range results are ordinary outcomes and are reported through the
/// `Ok` value instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A point or rectangle argument was rejected before the index was touched.
    ///
    /// The message names the offending condition, for example a non-finite
    /// coordinate or an inverted rectangle.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
