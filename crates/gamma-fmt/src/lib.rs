//! # gamma-fmt
//!
//! On-disk codec for projector gamma curve documents.
//!
//! This crate reads and writes the versioned `.gcv` container holding the
//! sampled curves a projector ingests. Two concerns live here:
//!
//! - [`gcv`] - the byte layout: signature, version, channel count,
//!   resolution, peak, and channel-major sample data
//! - [`atomic`] - the write discipline: full serialization to a temporary
//!   sibling file, sync, then one atomic swap
//!
//! A save either replaces the destination with a complete document or
//! leaves it exactly as it was; a load either returns a fully validated
//! [`CurveDocument`](gamma_core::CurveDocument) or an error. Files from
//! the structurally incompatible predecessor format are recognized by
//! signature and rejected up front.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gamma_fmt::gcv;
//!
//! let doc = gcv::read("projector.gcv")?;
//! println!("{} channels at {} samples", doc.channel_count(), doc.resolution());
//! gcv::write("projector.gcv", &doc)?;
//! ```
//!
//! # Dependencies
//!
//! - [`gamma-core`] - Document and error types
//! - [`tempfile`] - Temporary files backing the atomic swap
//!
//! # Used By
//!
//! - `gamma-cli` - Generation and inspection commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod atomic;
pub mod gcv;

pub use atomic::replace_file;
pub use gcv::{decode, encode, read, write, FileKind, EXTENSION, VERSION};
