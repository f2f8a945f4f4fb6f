//! The `.gcv` curve document format.
//!
//! Versioned binary container for sampled gamma curves, the artifact the
//! projector's companion software uploads to the device. Writes go through
//! the atomic replacement in [`crate::atomic`], so a destination file is
//! never left partially written.
//!
//! # Format
//!
//! All integers are little-endian. The header is 16 bytes and sample data
//! follows immediately:
//!
//! | offset | size  | field |
//! |--------|-------|-------|
//! | 0      | 4     | signature `"GCRV"` |
//! | 4      | 2     | layout version (currently 1) |
//! | 6      | 1     | channel count C (1 or 3) |
//! | 7      | 1     | reserved, written 0 |
//! | 8      | 4     | resolution N, samples per channel (>= 2) |
//! | 12     | 2     | peak output level |
//! | 14     | 2     | reserved, written 0 |
//! | 16     | 2*N*C | samples, channel-major (red, green, blue), `u16` each |
//!
//! Total size is exactly `16 + 2*N*C` bytes; trailing bytes are rejected.
//! Reserved fields are ignored on read.
//!
//! The predecessor raw-table format (signature `"GTBL"`) is structurally
//! incompatible and rejected before any field is parsed, as is any other
//! signature.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamma_fmt::gcv;
//!
//! let doc = gcv::read("projector.gcv")?;
//! gcv::write("projector.gcv", &doc)?;
//! ```

use crate::atomic;
use gamma_core::{CurveDocument, Error, Result, SampledCurve};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

// === Constants ===

/// File signature of the current document format: "GCRV".
pub const MAGIC: [u8; 4] = *b"GCRV";
/// File signature of the predecessor raw-table format: "GTBL".
pub const LEGACY_MAGIC: [u8; 4] = *b"GTBL";
/// Layout version this build writes and reads.
pub const VERSION: u16 = 1;
/// Header size in bytes; sample data starts here.
pub const HEADER_LEN: usize = 16;
/// Canonical file extension.
pub const EXTENSION: &str = "gcv";

// === Sniffing ===

/// Classification of a file by its signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Current document format, with the declared layout version.
    Curve {
        /// Version tag from the header. A signature match whose version
        /// field is cut off reports 0, which no writer ever produces.
        version: u16,
    },
    /// The predecessor raw-table format.
    Legacy,
    /// Anything else.
    Foreign,
}

impl FileKind {
    /// Classifies raw bytes by signature without parsing the body.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.len() < MAGIC.len() {
            return FileKind::Foreign;
        }
        if bytes[..4] == LEGACY_MAGIC {
            return FileKind::Legacy;
        }
        if bytes[..4] != MAGIC {
            return FileKind::Foreign;
        }
        let version = match bytes.get(4..6) {
            Some(v) => u16::from_le_bytes([v[0], v[1]]),
            None => 0,
        };
        FileKind::Curve { version }
    }

    /// Classifies a file on disk by reading its first bytes.
    pub fn detect<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut header = [0u8; 6];
        let n = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..n]))
    }
}

// === Encoding ===

/// Serializes a document to the on-disk byte layout.
///
/// Fails with [`Error::MalformedDocument`] for documents the format cannot
/// carry: a channel count other than 1 or 3, or a resolution below 2.
pub fn encode(doc: &CurveDocument) -> Result<Vec<u8>> {
    let channels = doc.channel_count();
    if channels != 1 && channels != 3 {
        return Err(Error::malformed(format!(
            "channel count {channels} (expected 1 or 3)"
        )));
    }
    let resolution = doc.resolution();
    if resolution < 2 {
        return Err(Error::malformed(format!(
            "resolution {resolution} is below the 2-sample minimum"
        )));
    }

    let mut out = Vec::with_capacity(HEADER_LEN + 2 * resolution as usize * channels);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.push(channels as u8);
    out.push(0); // reserved
    out.extend_from_slice(&resolution.to_le_bytes());
    out.extend_from_slice(&doc.peak().to_le_bytes());
    out.extend_from_slice(&[0, 0]); // reserved
    for curve in doc.channels() {
        for &value in curve.values() {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
    Ok(out)
}

// === Decoding ===

/// Parses a document from raw bytes.
///
/// Checks run signature first, then version, then structure: a foreign or
/// predecessor signature fails [`Error::IncompatibleFormat`], an unknown
/// version fails [`Error::UnsupportedVersion`], and any disagreement
/// between the header and the payload (truncated header, bad channel
/// count, short or oversized sample data, samples above the declared
/// peak) fails [`Error::MalformedDocument`]. On failure no document is
/// produced.
pub fn decode(data: &[u8]) -> Result<CurveDocument> {
    match FileKind::from_bytes(data) {
        FileKind::Curve { .. } => {}
        FileKind::Legacy => {
            return Err(Error::incompatible(
                "predecessor raw-table file (GTBL signature)",
            ));
        }
        FileKind::Foreign => {
            let reason = match data.get(..4) {
                Some(sig) => format!(
                    "unrecognized file signature 0x{:08X}",
                    u32::from_be_bytes([sig[0], sig[1], sig[2], sig[3]])
                ),
                None => format!("{} bytes is too short for a file signature", data.len()),
            };
            return Err(Error::incompatible(reason));
        }
    }

    if data.len() < HEADER_LEN {
        return Err(Error::malformed(format!(
            "header truncated: {} of {} bytes",
            data.len(),
            HEADER_LEN
        )));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version != VERSION {
        return Err(Error::unsupported_version(version, VERSION));
    }

    let channels = data[6] as usize;
    if channels != 1 && channels != 3 {
        return Err(Error::malformed(format!(
            "channel count {channels} (expected 1 or 3)"
        )));
    }
    let resolution = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
    if resolution < 2 {
        return Err(Error::malformed(format!(
            "declared resolution {resolution} is below the 2-sample minimum"
        )));
    }
    let peak = u16::from_le_bytes([data[12], data[13]]);

    let payload = &data[HEADER_LEN..];
    let expected = u64::from(resolution) * channels as u64 * 2;
    if (payload.len() as u64) < expected {
        return Err(Error::malformed(format!(
            "sample data truncated: header declares {} samples per channel, payload holds {}",
            resolution,
            payload.len() / (channels * 2)
        )));
    }
    if (payload.len() as u64) > expected {
        return Err(Error::malformed(format!(
            "{} trailing bytes after sample data",
            payload.len() as u64 - expected
        )));
    }

    let mut curves = Vec::with_capacity(channels);
    let mut offset = HEADER_LEN;
    for channel in 0..channels {
        let mut samples = Vec::with_capacity(resolution as usize);
        for index in 0..resolution {
            let value = u16::from_le_bytes([data[offset], data[offset + 1]]);
            if value > peak {
                return Err(Error::malformed(format!(
                    "channel {channel} sample {index} is {value}, above the declared peak {peak}"
                )));
            }
            samples.push(value);
            offset += 2;
        }
        curves.push(SampledCurve::new(samples));
    }
    CurveDocument::new(peak, curves)
}

// === File I/O ===

/// Reads and parses a curve document file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<CurveDocument> {
    let data = fs::read(path.as_ref())?;
    decode(&data)
}

/// Writes a curve document, atomically replacing any existing file.
///
/// The document is fully serialized in memory first; the destination is
/// only touched by the final atomic swap, so a failure at any step leaves
/// the previous file intact.
pub fn write<P: AsRef<Path>>(path: P, doc: &CurveDocument) -> Result<()> {
    let bytes = encode(doc)?;
    atomic::replace_file(path.as_ref(), &bytes)
}

// === Tests ===

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ramp(len: usize, top: u16) -> SampledCurve {
        let last = (len - 1) as u32;
        SampledCurve::new((0..len).map(|i| (i as u32 * top as u32 / last) as u16).collect())
    }

    fn rgb_doc() -> CurveDocument {
        CurveDocument::new(
            1023,
            vec![ramp(1024, 1023), ramp(1024, 900), ramp(1024, 1023)],
        )
        .unwrap()
    }

    #[test]
    fn test_roundtrip_rgb() {
        let doc = rgb_doc();
        let bytes = encode(&doc).unwrap();
        assert_eq!(bytes.len(), HEADER_LEN + 2 * 1024 * 3);

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_roundtrip_single_channel() {
        let doc = CurveDocument::new(255, vec![ramp(256, 255)]).unwrap();
        let bytes = encode(&doc).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.resolution(), 256);
        assert_eq!(decoded.peak(), 255);
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_header_layout() {
        let doc = rgb_doc();
        let bytes = encode(&doc).unwrap();

        assert_eq!(&bytes[..4], b"GCRV");
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 1);
        assert_eq!(bytes[6], 3);
        assert_eq!(bytes[7], 0);
        assert_eq!(u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]), 1024);
        assert_eq!(u16::from_le_bytes([bytes[12], bytes[13]]), 1023);
        assert_eq!(&bytes[14..16], &[0, 0]);

        // Channel-major order: the green table starts one channel in.
        let green_start = HEADER_LEN + 2 * 1024;
        let green_last = green_start + 2 * 1023;
        assert_eq!(
            u16::from_le_bytes([bytes[green_last], bytes[green_last + 1]]),
            900
        );
    }

    #[test]
    fn test_reserved_bytes_ignored() {
        let doc = rgb_doc();
        let mut bytes = encode(&doc).unwrap();
        bytes[7] = 0xFF;
        bytes[14] = 0xAB;
        bytes[15] = 0xCD;

        assert_eq!(decode(&bytes).unwrap(), doc);
    }

    #[test]
    fn test_rejects_legacy_signature() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LEGACY_MAGIC);
        bytes.extend_from_slice(&[0u8; 64]);

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::IncompatibleFormat { .. }));
        assert!(err.to_string().contains("GTBL"));
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let err = decode(b"\x89PNG\r\n\x1a\n").unwrap_err();
        assert!(matches!(err, Error::IncompatibleFormat { .. }));

        let err = decode(&[]).unwrap_err();
        assert!(matches!(err, Error::IncompatibleFormat { .. }));

        let err = decode(b"GC").unwrap_err();
        assert!(matches!(err, Error::IncompatibleFormat { .. }));
    }

    #[test]
    fn test_rejects_future_version() {
        let mut bytes = encode(&rgb_doc()).unwrap();
        bytes[4..6].copy_from_slice(&2u16.to_le_bytes());

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedVersion {
                found: 2,
                supported: 1
            }
        ));
    }

    #[test]
    fn test_rejects_truncated_header() {
        let bytes = encode(&rgb_doc()).unwrap();
        let err = decode(&bytes[..10]).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_rejects_bad_channel_count() {
        let mut bytes = encode(&rgb_doc()).unwrap();
        bytes[6] = 2;

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_rejects_short_sample_payload() {
        // Declared resolution 1024, payload holding only 900 samples.
        let doc = CurveDocument::new(1023, vec![ramp(1024, 1023)]).unwrap();
        let bytes = encode(&doc).unwrap();
        let truncated = &bytes[..HEADER_LEN + 2 * 900];

        let err = decode(truncated).unwrap_err();
        match err {
            Error::MalformedDocument { reason } => assert!(reason.contains("900")),
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = encode(&rgb_doc()).unwrap();
        bytes.extend_from_slice(&[0, 0]);

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_rejects_sample_above_declared_peak() {
        let doc = CurveDocument::new(1023, vec![ramp(4, 1023)]).unwrap();
        let mut bytes = encode(&doc).unwrap();
        bytes[12..14].copy_from_slice(&100u16.to_le_bytes());

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_rejects_resolution_below_minimum() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bytes.push(1);
        bytes.push(0);
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&10u16.to_le_bytes());
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(&5u16.to_le_bytes());

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_encode_rejects_two_channels() {
        let doc = CurveDocument::new(255, vec![ramp(16, 255), ramp(16, 255)]).unwrap();
        let err = encode(&doc).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_sniff() {
        assert_eq!(
            FileKind::from_bytes(b"GCRV\x01\x00"),
            FileKind::Curve { version: 1 }
        );
        assert_eq!(
            FileKind::from_bytes(b"GCRV"),
            FileKind::Curve { version: 0 }
        );
        assert_eq!(FileKind::from_bytes(b"GTBL\x00\x00"), FileKind::Legacy);
        assert_eq!(FileKind::from_bytes(b"LUT!"), FileKind::Foreign);
        assert_eq!(FileKind::from_bytes(b"GC"), FileKind::Foreign);
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.gcv");
        let doc = rgb_doc();

        write(&path, &doc).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_detect_file_kinds() {
        let dir = tempdir().unwrap();

        let curve_path = dir.path().join("ok.gcv");
        write(&curve_path, &rgb_doc()).unwrap();
        assert_eq!(
            FileKind::detect(&curve_path).unwrap(),
            FileKind::Curve { version: 1 }
        );

        let legacy_path = dir.path().join("old.tbl");
        fs::write(&legacy_path, b"GTBL\x00\x00raw").unwrap();
        assert_eq!(FileKind::detect(&legacy_path).unwrap(), FileKind::Legacy);

        let text_path = dir.path().join("notes.txt");
        fs::write(&text_path, b"hello").unwrap();
        assert_eq!(FileKind::detect(&text_path).unwrap(), FileKind::Foreign);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read(dir.path().join("none.gcv")).unwrap_err();
        assert!(err.is_io_error());
    }
}
