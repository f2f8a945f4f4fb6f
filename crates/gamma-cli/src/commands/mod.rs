//! CLI command implementations

pub mod check;
pub mod generate;
pub mod info;

use anyhow::{Context, Result};
use gamma_core::{Channel, ChannelLayout, CurveDocument, DeviceProfile};
use std::path::Path;

/// Load a curve document from a file.
pub fn load_document(path: &Path) -> Result<CurveDocument> {
    gamma_fmt::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Channel label for display, by document position.
pub fn channel_label(doc: &CurveDocument, index: usize) -> &'static str {
    if doc.channel_count() == 1 {
        "all"
    } else {
        Channel::ALL[index].name()
    }
}

/// The profile a document's own header fields imply.
///
/// Used when no profile flag pins the hardware expectations; the length and
/// channel-count checks then match the header by construction, leaving
/// monotonicity and sample range as the meaningful checks.
pub fn profile_for(doc: &CurveDocument) -> DeviceProfile {
    let layout = if doc.channel_count() == 1 {
        ChannelLayout::Single
    } else {
        ChannelLayout::Rgb
    };
    let max_input = (doc.resolution() - 1).min(u32::from(u16::MAX)) as u16;
    DeviceProfile::new(doc.resolution(), max_input, doc.peak(), layout)
}
