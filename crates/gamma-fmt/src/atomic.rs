//! Atomic file replacement.
//!
//! A document is written in full to a temporary file in the destination's
//! directory, synced, and only then swapped into place. An interruption at
//! any step leaves the previous destination file untouched, so a curve
//! file on disk is always either the old complete document or the new one.

use gamma_core::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the file at `path` with `bytes` in one atomic step.
///
/// The temporary file is created in the destination's own directory so the
/// final rename never crosses a filesystem boundary. The data is flushed
/// and synced before the swap. On any failure the destination keeps its
/// previous content (or continues not to exist).
///
/// Concurrent writers race at file granularity only: whichever replace
/// lands last wins, and readers always observe a complete document.
pub fn replace_file(path: &Path, bytes: &[u8]) -> Result<()> {
    // Path::parent returns an empty path for bare file names.
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
