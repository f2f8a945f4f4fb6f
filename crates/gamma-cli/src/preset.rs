//! YAML control point presets.
//!
//! A preset names the control points for a curve without committing to a
//! device profile; the profile is supplied when the preset is turned into
//! a model. Two shapes are accepted. Shared points applied to every
//! channel:
//!
//! ```yaml
//! points:
//!   - [0, 0]
//!   - [512, 600]
//!   - [1023, 1023]
//! ```
//!
//! Or separate points per channel:
//!
//! ```yaml
//! channels:
//!   red:
//!     - [0, 0]
//!     - [1023, 1000]
//!   green:
//!     - [0, 0]
//!     - [1023, 1023]
//!   blue:
//!     - [0, 10]
//!     - [1023, 1023]
//! ```

use anyhow::{bail, Context, Result};
use gamma_core::{Channel, ChannelLayout, ControlPoint, DeviceProfile};
use gamma_curve::GammaCurves;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A parsed preset file, not yet bound to a profile.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Points shared by every channel.
    #[serde(default)]
    points: Option<Vec<(u16, u16)>>,
    /// Per-channel points, RGB layouts only.
    #[serde(default)]
    channels: Option<ChannelPoints>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChannelPoints {
    red: Vec<(u16, u16)>,
    green: Vec<(u16, u16)>,
    blue: Vec<(u16, u16)>,
}

impl Preset {
    /// Read and parse a preset file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset: {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse preset: {}", path.display()))
    }

    /// Bind the preset to a profile, producing an editable curve model.
    pub fn into_model(self, profile: DeviceProfile) -> Result<GammaCurves> {
        match (self.points, self.channels) {
            (Some(points), None) => {
                let model = GammaCurves::with_points(profile, to_points(points))?;
                Ok(model)
            }
            (None, Some(channels)) => {
                if matches!(profile.layout, ChannelLayout::Single) {
                    bail!("preset assigns per-channel points but the profile has a single channel");
                }
                let mut model = GammaCurves::new(profile);
                model.set_points(Channel::Red.index(), to_points(channels.red))?;
                model.set_points(Channel::Green.index(), to_points(channels.green))?;
                model.set_points(Channel::Blue.index(), to_points(channels.blue))?;
                Ok(model)
            }
            (Some(_), Some(_)) => bail!("preset sets both `points` and `channels`"),
            (None, None) => bail!("preset sets neither `points` nor `channels`"),
        }
    }
}

fn to_points(pairs: Vec<(u16, u16)>) -> Vec<ControlPoint> {
    pairs
        .into_iter()
        .map(|(input, output)| ControlPoint::new(input, output))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARED: &str = "points:\n  - [0, 0]\n  - [512, 600]\n  - [1023, 1023]\n";

    const PER_CHANNEL: &str = "\
channels:
  red:
    - [0, 0]
    - [1023, 1000]
  green:
    - [0, 0]
    - [1023, 1023]
  blue:
    - [0, 10]
    - [1023, 1023]
";

    #[test]
    fn test_shared_points() {
        let preset: Preset = serde_yaml::from_str(SHARED).unwrap();
        let model = preset.into_model(DeviceProfile::ten_bit()).unwrap();
        assert_eq!(model.channel_count(), 3);
        for channel in 0..3 {
            assert_eq!(model.points(channel).len(), 3);
            assert_eq!(model.points(channel).points()[1], ControlPoint::new(512, 600));
        }
    }

    #[test]
    fn test_per_channel_points() {
        let preset: Preset = serde_yaml::from_str(PER_CHANNEL).unwrap();
        let model = preset.into_model(DeviceProfile::ten_bit()).unwrap();
        assert_eq!(
            model.points(Channel::Red.index()).last(),
            Some(ControlPoint::new(1023, 1000))
        );
        assert_eq!(
            model.points(Channel::Blue.index()).first(),
            Some(ControlPoint::new(0, 10))
        );
    }

    #[test]
    fn test_per_channel_needs_rgb_profile() {
        let preset: Preset = serde_yaml::from_str(PER_CHANNEL).unwrap();
        let single = DeviceProfile::new(256, 255, 255, ChannelLayout::Single);
        let err = preset.into_model(single).unwrap_err();
        assert!(err.to_string().contains("single channel"));
    }

    #[test]
    fn test_empty_preset_rejected() {
        let preset: Preset = serde_yaml::from_str("{}").unwrap();
        let err = preset.into_model(DeviceProfile::ten_bit()).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_both_shapes_rejected() {
        let yaml = format!("{SHARED}{PER_CHANNEL}");
        let preset: Preset = serde_yaml::from_str(&yaml).unwrap();
        let err = preset.into_model(DeviceProfile::ten_bit()).unwrap_err();
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_yaml::from_str::<Preset>("gamma: 2.2\n").is_err());
    }

    #[test]
    fn test_preset_points_checked_against_profile() {
        let preset: Preset = serde_yaml::from_str(SHARED).unwrap();
        let err = preset.into_model(DeviceProfile::eight_bit()).unwrap_err();
        assert!(err.to_string().contains("512"));
    }
}
