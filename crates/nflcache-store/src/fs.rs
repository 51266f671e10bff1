//! Filesystem helpers shared by the stores.

use nflcache_core::{DataError, Result};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Returns the sibling temp path that `path` is staged at before renaming.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes a file by staging it next to `path` and renaming it into place.
///
/// Parent directories are created as needed. A failed write leaves the
/// previous file at `path` untouched.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DataError::cache_write(parent, e))?;
    }

    let staging = staging_path(path);
    if let Err(e) = write(&staging) {
        let _ = std::fs::remove_file(&staging);
        return Err(e);
    }

    std::fs::rename(&staging, path).map_err(|e| {
        let _ = std::fs::remove_file(&staging);
        DataError::cache_write(path, e)
    })?;
    trace!(path = %path.display(), "Renamed staged file into place");
    Ok(())
}

/// Writes `contents` to `path` atomically.
pub(crate) fn write_bytes_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    write_atomic(path, |staging| {
        std::fs::write(staging, contents).map_err(|e| DataError::cache_write(staging, e))
    })
}
