//! Device capability profiles.
//!
//! A [`DeviceProfile`] bundles everything the pipeline needs to know about
//! one projector hardware variant: how many samples the device expects, the
//! input level span, the peak output level, and whether it takes one shared
//! curve or three per-channel curves. The profile is plain data passed into
//! derivation, validation, and the codec; hardware differences never appear
//! as conditionals anywhere else.

/// Color channel index within an RGB document.
///
/// Also fixes the channel order used in curve files (red first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Channel {
    /// Red channel curve.
    Red = 0,
    /// Green channel curve.
    Green = 1,
    /// Blue channel curve.
    Blue = 2,
}

impl Channel {
    /// All channels in document order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel within a document.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How many curves the device ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// One curve shared by all channels.
    Single,
    /// Independent red, green, and blue curves.
    Rgb,
}

impl ChannelLayout {
    /// Number of channel curves this layout carries.
    #[inline]
    pub fn channel_count(self) -> usize {
        match self {
            ChannelLayout::Single => 1,
            ChannelLayout::Rgb => 3,
        }
    }
}

/// Capability description of one projector hardware variant.
///
/// `resolution` is the number of table entries the device expects,
/// `max_input` the largest input level (inputs span `0..=max_input`), and
/// `peak` the largest output level. Derivation rejects profiles whose
/// resolution or input span cannot produce a positive sample spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Number of samples in a derived curve.
    pub resolution: u32,
    /// Largest input level.
    pub max_input: u16,
    /// Largest output level.
    pub peak: u16,
    /// Channel layout the device ingests.
    pub layout: ChannelLayout,
}

impl DeviceProfile {
    /// Create a profile for custom hardware.
    #[inline]
    pub fn new(resolution: u32, max_input: u16, peak: u16, layout: ChannelLayout) -> Self {
        Self {
            resolution,
            max_input,
            peak,
            layout,
        }
    }

    /// The 10-bit RGB profile: 1024 samples over inputs 0..=1023, peak 1023.
    ///
    /// This is the default profile throughout the workspace.
    pub fn ten_bit() -> Self {
        Self::new(1024, 1023, 1023, ChannelLayout::Rgb)
    }

    /// The 8-bit RGB profile: 256 samples over inputs 0..=255, peak 255.
    pub fn eight_bit() -> Self {
        Self::new(256, 255, 255, ChannelLayout::Rgb)
    }

    /// Number of channel curves a document for this profile carries.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.layout.channel_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_bit_profile() {
        let p = DeviceProfile::ten_bit();
        assert_eq!(p.resolution, 1024);
        assert_eq!(p.max_input, 1023);
        assert_eq!(p.peak, 1023);
        assert_eq!(p.channel_count(), 3);
    }

    #[test]
    fn test_eight_bit_profile() {
        let p = DeviceProfile::eight_bit();
        assert_eq!(p.resolution, 256);
        assert_eq!(p.max_input, 255);
        assert_eq!(p.channel_count(), 3);
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(Channel::Red.index(), 0);
        assert_eq!(Channel::Green.index(), 1);
        assert_eq!(Channel::Blue.index(), 2);
        assert_eq!(Channel::ALL[2].name(), "blue");
    }

    #[test]
    fn test_single_layout() {
        let p = DeviceProfile::new(256, 255, 255, ChannelLayout::Single);
        assert_eq!(p.channel_count(), 1);
    }
}
