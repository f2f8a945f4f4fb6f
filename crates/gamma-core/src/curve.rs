//! Sampled curves and the persisted document unit.

use crate::error::{Result, Violation};

/// An immutable table of output levels, one per uniformly spaced input level.
///
/// Produced by derivation or by the document codec; never patched in place.
/// A fresh derivation replaces the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledCurve {
    samples: Vec<u16>,
}

impl SampledCurve {
    /// Wrap a raw sample table.
    #[inline]
    pub fn new(samples: Vec<u16>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the table holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample values in input order.
    #[inline]
    pub fn values(&self) -> &[u16] {
        &self.samples
    }

    /// First sample, if any.
    #[inline]
    pub fn first(&self) -> Option<u16> {
        self.samples.first().copied()
    }

    /// Last sample, if any.
    #[inline]
    pub fn last(&self) -> Option<u16> {
        self.samples.last().copied()
    }

    /// True when no sample is below its predecessor.
    pub fn is_non_decreasing(&self) -> bool {
        self.samples.windows(2).all(|w| w[0] <= w[1])
    }
}

/// The persisted unit: one sampled curve per channel plus format metadata.
///
/// Construction checks the cross-channel invariants, so a document in memory
/// always has at least one channel, equal per-channel resolutions, and every
/// sample within `0..=peak`. Monotonicity is deliberately not enforced here;
/// that is the validator's audit (a loaded foreign-made document may carry a
/// decreasing table worth reporting rather than refusing to represent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveDocument {
    resolution: u32,
    peak: u16,
    channels: Vec<SampledCurve>,
}

impl CurveDocument {
    /// Assemble a document from per-channel curves.
    ///
    /// Fails with a [`Violation`] when no channel is given, when channel
    /// resolutions differ, or when a sample exceeds `peak`.
    pub fn new(peak: u16, channels: Vec<SampledCurve>) -> Result<Self> {
        let first = match channels.first() {
            Some(c) => c.len(),
            None => {
                return Err(Violation::ChannelCount {
                    expected: 1,
                    found: 0,
                }
                .into());
            }
        };
        for curve in &channels {
            if curve.len() != first {
                return Err(Violation::MismatchedResolution {
                    first,
                    other: curve.len(),
                }
                .into());
            }
            for (i, &v) in curve.values().iter().enumerate() {
                if v > peak {
                    return Err(Violation::SampleOutOfRange {
                        index: i,
                        value: v,
                        peak,
                    }
                    .into());
                }
            }
        }
        Ok(Self {
            resolution: first as u32,
            peak,
            channels,
        })
    }

    /// Samples per channel.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Peak output level the samples are bounded by.
    #[inline]
    pub fn peak(&self) -> u16 {
        self.peak
    }

    /// The channel curves in document order (red first for RGB).
    #[inline]
    pub fn channels(&self) -> &[SampledCurve] {
        &self.channels
    }

    /// Number of channel curves.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// One channel curve by document position.
    #[inline]
    pub fn channel(&self, index: usize) -> Option<&SampledCurve> {
        self.channels.get(index)
    }
}
