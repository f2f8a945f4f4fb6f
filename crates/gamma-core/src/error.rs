//! Error types for gamma curve operations.
//!
//! This module provides the unified error handling system for the whole
//! calibration pipeline: curve editing, derivation, validation, and the
//! on-disk document codec.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Control point editing (range and uniqueness checks)
//! - Curve derivation (insufficient points, degenerate sampling ranges)
//! - Invariant validation before persistence
//! - Document encoding/decoding and atomic file replacement
//!
//! # Usage
//!
//! ```rust
//! use gamma_core::{Error, Result};
//!
//! fn check_input(input: u16, max_input: u16) -> Result<()> {
//!     if input > max_input {
//!         return Err(Error::invalid_point(format!(
//!             "input {input} outside 0..={max_input}"
//!         )));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `gamma-curve` - Editing, derivation, and validation errors
//! - `gamma-fmt` - Codec and file I/O errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// A specific invariant broken by a control set, sample table, or document.
///
/// Carried by [`Error::Validation`]. Validation reports the first violation
/// found and never repairs data; repair (the derivation clamp policy) is the
/// interpolator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// A control point lies outside the device's input or output range.
    #[error("control point {index} ({input}, {output}) outside the device range")]
    PointOutOfRange {
        /// Index of the offending point.
        index: usize,
        /// Point input level.
        input: u16,
        /// Point output level.
        output: u16,
    },

    /// Control point inputs are not strictly increasing.
    #[error("control point inputs not strictly increasing at index {index}")]
    InputsNotIncreasing {
        /// Index of the first point that is not above its predecessor.
        index: usize,
    },

    /// A sample table does not have the declared number of entries.
    #[error("sample table has {found} entries, expected {expected}")]
    WrongLength {
        /// Entry count the device profile declares.
        expected: u32,
        /// Entry count actually present.
        found: usize,
    },

    /// A sample table decreases somewhere.
    #[error("sample table decreases at index {index}")]
    NotMonotonic {
        /// Index of the first sample below its predecessor.
        index: usize,
    },

    /// A sample value exceeds the peak output level.
    #[error("sample {index} is {value}, above peak {peak}")]
    SampleOutOfRange {
        /// Index of the offending sample.
        index: usize,
        /// Sample value.
        value: u16,
        /// Peak output level in force.
        peak: u16,
    },

    /// Channel curves within one document have differing resolutions.
    #[error("channel resolutions differ: {first} vs {other}")]
    MismatchedResolution {
        /// Resolution of the first channel.
        first: usize,
        /// Conflicting resolution found on a later channel.
        other: usize,
    },

    /// The document's channel count does not fit the expected layout.
    #[error("document has {found} channel curves, expected {expected}")]
    ChannelCount {
        /// Channel count the layout expects.
        expected: usize,
        /// Channel count actually present.
        found: usize,
    },
}

/// Errors that can occur while building, deriving, validating, or
/// persisting gamma curves.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Editing errors**: [`InvalidControlPoint`](Error::InvalidControlPoint)
/// - **Derivation errors**: [`InsufficientPoints`](Error::InsufficientPoints),
///   [`DegenerateRange`](Error::DegenerateRange)
/// - **Validation errors**: [`Validation`](Error::Validation)
/// - **Codec errors**: [`UnsupportedVersion`](Error::UnsupportedVersion),
///   [`MalformedDocument`](Error::MalformedDocument),
///   [`IncompatibleFormat`](Error::IncompatibleFormat)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// A control point was rejected at edit time.
    ///
    /// Returned when an input or output falls outside the device range,
    /// when an input collides with an existing point, or when an edit
    /// references a point that does not exist.
    #[error("invalid control point: {reason}")]
    InvalidControlPoint {
        /// Why the point was rejected.
        reason: String,
    },

    /// Too few control points to derive a curve.
    ///
    /// Derivation needs at least two points to span a segment.
    #[error("need at least 2 control points, found {found}")]
    InsufficientPoints {
        /// Number of points actually present.
        found: usize,
    },

    /// The device profile cannot produce a positive sample spacing.
    ///
    /// Raised when the resolution is below 2 or the input range is empty.
    #[error("degenerate sample range: {reason}")]
    DegenerateRange {
        /// Why the range is unusable.
        reason: String,
    },

    /// An invariant check failed.
    ///
    /// Wraps the specific [`Violation`]; validation reports, it never
    /// repairs.
    #[error("validation failed: {0}")]
    Validation(#[from] Violation),

    /// A curve file declares a layout version this build does not know.
    #[error("unsupported curve file version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version tag found in the file.
        found: u16,
        /// Newest version this build reads.
        supported: u16,
    },

    /// A curve file is recognized but internally inconsistent.
    ///
    /// Field counts, resolution, or value ranges disagree with the declared
    /// header.
    #[error("malformed curve document: {reason}")]
    MalformedDocument {
        /// What disagrees with the header.
        reason: String,
    },

    /// The file is not a curve document at all.
    ///
    /// Covers the predecessor raw-table format and any foreign signature;
    /// such files are rejected before any field is parsed.
    #[error("incompatible curve file: {reason}")]
    IncompatibleFormat {
        /// How the file was classified.
        reason: String,
    },

    /// I/O error during file operations.
    ///
    /// Wraps [`std::io::Error`] for reading, writing, and the atomic
    /// replace step.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidControlPoint`] error.
    #[inline]
    pub fn invalid_point(reason: impl Into<String>) -> Self {
        Self::InvalidControlPoint {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InsufficientPoints`] error.
    #[inline]
    pub fn insufficient_points(found: usize) -> Self {
        Self::InsufficientPoints { found }
    }

    /// Creates an [`Error::DegenerateRange`] error.
    #[inline]
    pub fn degenerate_range(reason: impl Into<String>) -> Self {
        Self::DegenerateRange {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnsupportedVersion`] error.
    #[inline]
    pub fn unsupported_version(found: u16, supported: u16) -> Self {
        Self::UnsupportedVersion { found, supported }
    }

    /// Creates an [`Error::MalformedDocument`] error.
    #[inline]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::IncompatibleFormat`] error.
    #[inline]
    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self::IncompatibleFormat {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a validation error.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if this is a file-format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedVersion { .. }
                | Self::MalformedDocument { .. }
                | Self::IncompatibleFormat { .. }
        )
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
