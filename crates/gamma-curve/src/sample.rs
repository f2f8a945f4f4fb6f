//! Derivation of device sample tables from control sets.
//!
//! This is the bake step: fit a monotone spline through the control points,
//! evaluate it at every input level the device addresses, and reduce to
//! integers under the device's output range.
//!
//! # Policy
//!
//! - Implicit endpoints are materialized flat: a set starting above input 0
//!   (or ending below `max_input`) is extended with a constant segment.
//! - Evaluations are rounded half away from zero and clamped to the peak.
//! - The first and last samples are set to the first and last control
//!   outputs exactly.
//! - A final forward sweep clamps any decreasing sample up to its
//!   predecessor, so the table is non-decreasing for identical input,
//!   reproducibly.

use gamma_core::{ControlSet, DeviceProfile, Error, Result, SampledCurve};

use crate::eval::eval_spline;
use crate::slopes::Knot;
use crate::spline::fit_monotone_spline;

/// Derive a device sample table from a control set.
///
/// The table has exactly `profile.resolution` entries covering inputs
/// `0..=profile.max_input` uniformly and is non-decreasing end to end.
///
/// Fails with [`Error::InsufficientPoints`] when the set has fewer than two
/// points and with [`Error::DegenerateRange`] when the profile cannot
/// produce a positive sample spacing.
pub fn sample_curve(set: &ControlSet, profile: &DeviceProfile) -> Result<SampledCurve> {
    if set.len() < 2 {
        return Err(Error::insufficient_points(set.len()));
    }
    if profile.resolution < 2 {
        return Err(Error::degenerate_range(format!(
            "resolution {} leaves no room between samples",
            profile.resolution
        )));
    }
    if profile.max_input == 0 {
        return Err(Error::degenerate_range("input range 0..=0 is empty"));
    }

    let knots = materialize_knots(set, profile);
    let spline = fit_monotone_spline(&knots);

    let n = profile.resolution as usize;
    let max_input = profile.max_input as f32;
    let peak = profile.peak as f32;
    let denom = (n - 1) as f32;

    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f32 * max_input / denom;
        let y = eval_spline(&spline, x).clamp(0.0, peak);
        samples.push((y + 0.5).floor() as u16);
    }

    // Endpoints carry the control outputs exactly
    let first = set.first().map(|p| p.output).unwrap_or(0);
    let last = set.last().map(|p| p.output).unwrap_or(0);
    samples[0] = first.min(profile.peak);
    samples[n - 1] = last.min(profile.peak);

    // Monotonic backstop: a dip clamps up to its predecessor
    for i in 1..n {
        if samples[i] < samples[i - 1] {
            samples[i] = samples[i - 1];
        }
    }

    Ok(SampledCurve::new(samples))
}

/// Convert a control set to float knots spanning the full input range.
///
/// Missing endpoints are added as flat extensions of the nearest control
/// point.
fn materialize_knots(set: &ControlSet, profile: &DeviceProfile) -> Vec<Knot> {
    let pts = set.points();
    let mut knots = Vec::with_capacity(pts.len() + 2);

    let first = pts[0];
    if first.input > 0 {
        knots.push(Knot::new(0.0, first.output as f32));
    }
    for p in pts {
        knots.push(Knot::new(p.input as f32, p.output as f32));
    }
    let last = pts[pts.len() - 1];
    if last.input < profile.max_input {
        knots.push(Knot::new(profile.max_input as f32, last.output as f32));
    }

    knots
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamma_core::{ChannelLayout, ControlPoint};

    fn set(points: &[(u16, u16)], profile: &DeviceProfile) -> ControlSet {
        ControlSet::from_points(
            points.iter().map(|&(i, o)| ControlPoint::new(i, o)).collect(),
            profile,
        )
        .unwrap()
    }

    #[test]
    fn test_identity_ten_bit() {
        let profile = DeviceProfile::ten_bit();
        let curve = sample_curve(&ControlSet::identity(&profile), &profile).unwrap();
        assert_eq!(curve.len(), 1024);
        for (i, &v) in curve.values().iter().enumerate() {
            assert_eq!(v as usize, i, "identity broken at {i}");
        }
    }

    #[test]
    fn test_midpoint_lift() {
        let profile = DeviceProfile::ten_bit();
        let curve = sample_curve(
            &set(&[(0, 0), (512, 600), (1023, 1023)], &profile),
            &profile,
        )
        .unwrap();
        assert_eq!(curve.len(), 1024);
        assert_eq!(curve.first(), Some(0));
        assert_eq!(curve.values()[512], 600);
        assert_eq!(curve.last(), Some(1023));
        assert!(curve.is_non_decreasing());
    }

    #[test]
    fn test_endpoint_fidelity_with_implicit_endpoints() {
        let profile = DeviceProfile::ten_bit();
        let curve = sample_curve(&set(&[(500, 300), (600, 400)], &profile), &profile).unwrap();
        assert_eq!(curve.first(), Some(300));
        assert_eq!(curve.last(), Some(400));
        assert!(curve.is_non_decreasing());
        // Flat extensions stay flat
        assert_eq!(curve.values()[250], 300);
        assert_eq!(curve.values()[800], 400);
    }

    #[test]
    fn test_resolution_invariant() {
        for resolution in [2u32, 3, 7, 256, 1024] {
            let profile = DeviceProfile::new(resolution, 1023, 1023, ChannelLayout::Rgb);
            let curve = sample_curve(&ControlSet::identity(&profile), &profile).unwrap();
            assert_eq!(curve.len(), resolution as usize);
            assert_eq!(curve.first(), Some(0));
            assert_eq!(curve.last(), Some(1023));
        }
    }

    #[test]
    fn test_monotone_for_steep_sets() {
        let profile = DeviceProfile::ten_bit();
        let cases: [&[(u16, u16)]; 4] = [
            &[(0, 0), (100, 950), (1023, 1023)],
            &[(0, 0), (500, 1), (520, 1000), (1023, 1023)],
            &[(0, 100), (1, 101), (1022, 900), (1023, 1023)],
            &[(0, 0), (256, 100), (512, 600), (768, 900), (1023, 1023)],
        ];
        for points in cases {
            let curve = sample_curve(&set(points, &profile), &profile).unwrap();
            assert!(curve.is_non_decreasing(), "dip for {points:?}");
            assert_eq!(curve.first(), Some(points[0].1));
            assert_eq!(curve.last(), Some(points[points.len() - 1].1));
        }
    }

    #[test]
    fn test_decreasing_outputs_flattened() {
        // Outputs fall between the middle points; monotonicity wins
        let profile = DeviceProfile::ten_bit();
        let curve = sample_curve(
            &set(&[(0, 0), (400, 700), (600, 500), (1023, 1023)], &profile),
            &profile,
        )
        .unwrap();
        assert!(curve.is_non_decreasing());
        assert_eq!(curve.first(), Some(0));
        assert_eq!(curve.last(), Some(1023));
    }

    #[test]
    fn test_insufficient_points() {
        let profile = DeviceProfile::ten_bit();
        let err = sample_curve(&set(&[(512, 600)], &profile), &profile).unwrap_err();
        assert!(matches!(err, Error::InsufficientPoints { found: 1 }));
        let err = sample_curve(&set(&[], &profile), &profile).unwrap_err();
        assert!(matches!(err, Error::InsufficientPoints { found: 0 }));
    }

    #[test]
    fn test_degenerate_profiles() {
        let narrow = DeviceProfile::new(1, 1023, 1023, ChannelLayout::Rgb);
        let err = sample_curve(&ControlSet::identity(&narrow), &narrow).unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { .. }));

        let empty_span = DeviceProfile::new(256, 0, 255, ChannelLayout::Rgb);
        let err = sample_curve(&ControlSet::identity(&empty_span), &empty_span).unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { .. }));
    }

    #[test]
    fn test_two_sample_resolution() {
        let profile = DeviceProfile::new(2, 1023, 1023, ChannelLayout::Rgb);
        let curve = sample_curve(
            &set(&[(0, 11), (1023, 997)], &profile),
            &profile,
        )
        .unwrap();
        assert_eq!(curve.values(), &[11, 997]);
    }

    #[test]
    fn test_eight_bit_profile() {
        let profile = DeviceProfile::eight_bit();
        let curve = sample_curve(
            &set(&[(0, 0), (128, 180), (255, 255)], &profile),
            &profile,
        )
        .unwrap();
        assert_eq!(curve.len(), 256);
        assert_eq!(curve.values()[128], 180);
        assert!(curve.is_non_decreasing());
        assert!(curve.values().iter().all(|&v| v <= 255));
    }

    #[test]
    fn test_derivation_is_reproducible() {
        let profile = DeviceProfile::ten_bit();
        let s = set(&[(0, 5), (300, 200), (700, 800), (1023, 1020)], &profile);
        let a = sample_curve(&s, &profile).unwrap();
        let b = sample_curve(&s, &profile).unwrap();
        assert_eq!(a, b);
    }
}
