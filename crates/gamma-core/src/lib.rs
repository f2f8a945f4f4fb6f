//! # gamma-core
//!
//! Core types for projector gamma calibration.
//!
//! This crate provides the foundational types used throughout the gamma-rs
//! workspace:
//!
//! - [`ControlPoint`], [`ControlSet`] - User-specified curve anchors with
//!   strictly increasing inputs
//! - [`SampledCurve`] - An immutable, densely sampled response table
//! - [`CurveDocument`] - The persisted unit: per-channel tables plus format
//!   metadata
//! - [`DeviceProfile`], [`ChannelLayout`], [`Channel`] - Capability
//!   description of one projector hardware variant
//! - [`Error`], [`Violation`] - The unified error vocabulary
//!
//! ## Design Philosophy
//!
//! Curves flow one way: a `ControlSet` is edited, a `SampledCurve` is
//! derived from it, a `CurveDocument` bundles the channels for disk. Derived
//! tables are immutable values; editing a set and re-deriving is the only
//! way to change one. Hardware differences live in the `DeviceProfile`
//! alone, which the derivation, validation, and codec layers take as plain
//! data.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of gamma-rs and has no internal
//! dependencies. The other workspace crates build on it:
//!
//! ```text
//! gamma-core (this crate)
//!    ^
//!    |
//!    +-- gamma-curve (model, interpolator, validator)
//!    +-- gamma-fmt (document codec, atomic writes)
//!    +-- gamma-cli (command-line driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod error;
pub mod point;
pub mod profile;

// Re-exports for convenience
pub use curve::{CurveDocument, SampledCurve};
pub use error::{Error, Result, Violation};
pub use point::{ControlPoint, ControlSet};
pub use profile::{Channel, ChannelLayout, DeviceProfile};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gamma_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::curve::{CurveDocument, SampledCurve};
    pub use crate::error::{Error, Result, Violation};
    pub use crate::point::{ControlPoint, ControlSet};
    pub use crate::profile::{Channel, ChannelLayout, DeviceProfile};
}
