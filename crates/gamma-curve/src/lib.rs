//! # gamma-curve
//!
//! Monotone curve derivation and validation for projector gamma
//! calibration.
//!
//! This crate turns a handful of user-placed control points into the dense,
//! monotonic response table a projector ingests:
//!
//! 1. **Control points**: the caller edits a [`GammaCurves`] model holding
//!    one [`ControlSet`](gamma_core::ControlSet) per channel
//! 2. **Slope estimation**: slopes at each knot come from length-weighted
//!    secant averaging, limited so the fit cannot overshoot
//! 3. **Spline fitting**: each interval gets one quadratic arc, or two arcs
//!    split at an optimal break when the end slopes demand it
//! 4. **Sampling**: the spline is evaluated at every device input level,
//!    rounded, clamped to the output range, and swept monotone
//! 5. **Validation**: [`validate_points`], [`validate_samples`], and
//!    [`validate_document`] audit data before persistence and never repair
//!
//! # Example
//!
//! ```
//! use gamma_core::{ControlPoint, ControlSet, DeviceProfile};
//! use gamma_curve::sample_curve;
//!
//! let profile = DeviceProfile::ten_bit();
//! let set = ControlSet::from_points(
//!     vec![
//!         ControlPoint::new(0, 0),
//!         ControlPoint::new(512, 600),
//!         ControlPoint::new(1023, 1023),
//!     ],
//!     &profile,
//! )?;
//!
//! let curve = sample_curve(&set, &profile)?;
//! assert_eq!(curve.len(), 1024);
//! assert_eq!(curve.values()[512], 600);
//! assert!(curve.is_non_decreasing());
//! # Ok::<(), gamma_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod eval;
pub mod model;
pub mod power;
pub mod sample;
pub mod slopes;
pub mod spline;
pub mod validate;

// Re-export the public API
pub use eval::eval_spline;
pub use model::GammaCurves;
pub use power::{power_law_points, DEFAULT_ANCHOR_COUNT};
pub use sample::sample_curve;
pub use slopes::{monotone_slopes, Knot};
pub use spline::{fit_monotone_spline, SplineData};
pub use validate::{validate_document, validate_points, validate_samples};
