//! Power-law control point generation.
//!
//! Seeds an editable curve from a plain gamma exponent: anchors are placed
//! on `out = peak * (in / max_input)^gamma`, the display response
//! convention (gamma above 1 pulls the mid tones down).

use gamma_core::{ControlPoint, DeviceProfile, Error, Result};

/// Anchor count used when the caller has no preference.
pub const DEFAULT_ANCHOR_COUNT: usize = 9;

/// Build control points lying on a power-law curve.
///
/// `count` anchors are spread uniformly over the input range, endpoints
/// included. Fails with [`Error::DegenerateRange`] for a non-positive or
/// non-finite exponent and [`Error::InsufficientPoints`] for fewer than
/// two anchors.
pub fn power_law_points(
    profile: &DeviceProfile,
    gamma: f32,
    count: usize,
) -> Result<Vec<ControlPoint>> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(Error::degenerate_range(format!(
            "gamma exponent must be positive and finite, got {gamma}"
        )));
    }
    if count < 2 {
        return Err(Error::insufficient_points(count));
    }

    // More anchors than input levels would collide after rounding
    let count = count.min(profile.max_input as usize + 1);

    let max_input = profile.max_input as f32;
    let peak = profile.peak as f32;
    let denom = (count - 1) as f32;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let x = i as f32 * max_input / denom;
        let y = peak * (x / max_input).powf(gamma);
        let input = (x + 0.5).floor() as u16;
        let output = (y.clamp(0.0, peak) + 0.5).floor() as u16;
        points.push(ControlPoint::new(input, output));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_gamma_is_identity_anchors() {
        let profile = DeviceProfile::ten_bit();
        let points = power_law_points(&profile, 1.0, DEFAULT_ANCHOR_COUNT).unwrap();
        assert_eq!(points.len(), DEFAULT_ANCHOR_COUNT);
        for p in &points {
            assert_eq!(p.input, p.output);
        }
    }

    #[test]
    fn test_gamma_endpoints_and_shape() {
        let profile = DeviceProfile::ten_bit();
        let points = power_law_points(&profile, 2.2, DEFAULT_ANCHOR_COUNT).unwrap();
        assert_eq!(points.first().unwrap(), &ControlPoint::new(0, 0));
        assert_eq!(points.last().unwrap(), &ControlPoint::new(1023, 1023));
        // Gamma above 1 pulls interior values below the diagonal
        for p in &points[1..points.len() - 1] {
            assert!(p.output < p.input, "anchor {p:?} not lowered");
        }
        // Inputs strictly increasing
        for w in points.windows(2) {
            assert!(w[0].input < w[1].input);
        }
    }

    #[test]
    fn test_low_gamma_lifts() {
        let profile = DeviceProfile::eight_bit();
        let points = power_law_points(&profile, 0.5, 5).unwrap();
        for p in &points[1..points.len() - 1] {
            assert!(p.output > p.input, "anchor {p:?} not lifted");
        }
    }

    #[test]
    fn test_bad_gamma_rejected() {
        let profile = DeviceProfile::ten_bit();
        assert!(matches!(
            power_law_points(&profile, 0.0, 9).unwrap_err(),
            Error::DegenerateRange { .. }
        ));
        assert!(power_law_points(&profile, -2.0, 9).is_err());
        assert!(power_law_points(&profile, f32::NAN, 9).is_err());
        assert!(matches!(
            power_law_points(&profile, 2.2, 1).unwrap_err(),
            Error::InsufficientPoints { found: 1 }
        ));
    }

    #[test]
    fn test_anchor_count_capped_by_input_levels() {
        let tiny = DeviceProfile::new(8, 7, 255, gamma_core::ChannelLayout::Single);
        let points = power_law_points(&tiny, 2.2, 64).unwrap();
        assert_eq!(points.len(), 8);
        for w in points.windows(2) {
            assert!(w[0].input < w[1].input);
        }
    }
}
