//! The editable curve model.
//!
//! [`GammaCurves`] owns one control set per channel and derives immutable
//! sample tables on demand. There is no cached derived state: every edit
//! goes to a control set, every read of the response goes through a fresh
//! derivation, so a stale table cannot exist.

use gamma_core::{
    ControlPoint, ControlSet, CurveDocument, DeviceProfile, Result, SampledCurve,
};

use crate::sample::sample_curve;

/// Per-channel control sets for one device, plus the device profile.
///
/// Channels are addressed by document position: 0 for a single-curve
/// layout, 0..3 (red, green, blue) for RGB.
#[derive(Debug, Clone)]
pub struct GammaCurves {
    profile: DeviceProfile,
    sets: Vec<ControlSet>,
}

impl GammaCurves {
    /// Create identity curves for a profile.
    pub fn new(profile: DeviceProfile) -> Self {
        let sets = vec![ControlSet::identity(&profile); profile.channel_count()];
        Self { profile, sets }
    }

    /// Create curves with the same control points on every channel.
    pub fn with_points(profile: DeviceProfile, points: Vec<ControlPoint>) -> Result<Self> {
        let set = ControlSet::from_points(points, &profile)?;
        let sets = vec![set; profile.channel_count()];
        Ok(Self { profile, sets })
    }

    /// The device profile these curves target.
    #[inline]
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Number of channels.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.sets.len()
    }

    /// The control set for a channel.
    ///
    /// Panics when `channel` is not below [`channel_count`](Self::channel_count).
    #[inline]
    pub fn points(&self, channel: usize) -> &ControlSet {
        &self.sets[channel]
    }

    /// Add a control point to a channel.
    pub fn add_point(&mut self, channel: usize, point: ControlPoint) -> Result<()> {
        self.sets[channel].insert(point, &self.profile)
    }

    /// Remove the control point at `input` from a channel.
    pub fn remove_point(&mut self, channel: usize, input: u16) -> Result<ControlPoint> {
        self.sets[channel].remove(input)
    }

    /// Move a channel's control point at `input` to a new position.
    pub fn move_point(&mut self, channel: usize, input: u16, to: ControlPoint) -> Result<()> {
        self.sets[channel].move_point(input, to, &self.profile)
    }

    /// Replace a channel's control set wholesale.
    pub fn set_points(&mut self, channel: usize, points: Vec<ControlPoint>) -> Result<()> {
        self.sets[channel] = ControlSet::from_points(points, &self.profile)?;
        Ok(())
    }

    /// Derive the sample table for one channel.
    ///
    /// Each call fits and samples afresh from the current control set.
    pub fn derive(&self, channel: usize) -> Result<SampledCurve> {
        sample_curve(&self.sets[channel], &self.profile)
    }

    /// Derive every channel and assemble the document.
    pub fn derive_document(&self) -> Result<CurveDocument> {
        let mut channels = Vec::with_capacity(self.sets.len());
        for set in &self.sets {
            channels.push(sample_curve(set, &self.profile)?);
        }
        CurveDocument::new(self.profile.peak, channels)
    }
}
