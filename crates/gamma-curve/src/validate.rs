//! Invariant checks before persistence.
//!
//! Validation reports the first violated invariant and never repairs data.
//! Repair (the derivation clamp policy) happens only while sampling; a
//! table that arrives here broken stays broken and gets reported.

use gamma_core::{ControlPoint, CurveDocument, DeviceProfile, Result, SampledCurve, Violation};

/// Check a list of control points against a profile.
///
/// Verifies every point lies within the device range and inputs are
/// strictly increasing. The points are audited as given; they are not
/// sorted first.
pub fn validate_points(points: &[ControlPoint], profile: &DeviceProfile) -> Result<()> {
    for (index, p) in points.iter().enumerate() {
        if p.input > profile.max_input || p.output > profile.peak {
            return Err(Violation::PointOutOfRange {
                index,
                input: p.input,
                output: p.output,
            }
            .into());
        }
        if index > 0 && points[index - 1].input >= p.input {
            return Err(Violation::InputsNotIncreasing { index }.into());
        }
    }
    Ok(())
}

/// Check a sample table against a profile.
///
/// Verifies the table has exactly the profile's resolution, is
/// non-decreasing end to end, and stays within the output range.
pub fn validate_samples(curve: &SampledCurve, profile: &DeviceProfile) -> Result<()> {
    if curve.len() != profile.resolution as usize {
        return Err(Violation::WrongLength {
            expected: profile.resolution,
            found: curve.len(),
        }
        .into());
    }
    let values = curve.values();
    for (i, w) in values.windows(2).enumerate() {
        if w[1] < w[0] {
            return Err(Violation::NotMonotonic { index: i + 1 }.into());
        }
    }
    for (index, &value) in values.iter().enumerate() {
        if value > profile.peak {
            return Err(Violation::SampleOutOfRange {
                index,
                value,
                peak: profile.peak,
            }
            .into());
        }
    }
    Ok(())
}

/// Check a whole document against a profile.
///
/// Verifies the channel count matches the profile's layout and every
/// channel passes [`validate_samples`].
pub fn validate_document(doc: &CurveDocument, profile: &DeviceProfile) -> Result<()> {
    let expected = profile.channel_count();
    if doc.channel_count() != expected {
        return Err(Violation::ChannelCount {
            expected,
            found: doc.channel_count(),
        }
        .into());
    }
    for curve in doc.channels() {
        validate_samples(curve, profile)?;
    }
    Ok(())
}
