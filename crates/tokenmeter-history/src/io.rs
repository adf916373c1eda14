//! JSON file I/O and atomic file operations

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read a JSON document, tolerating a missing or corrupt file
///
/// A file that does not exist or does not parse yields `T::default()`.
/// Other I/O errors propagate.
pub fn read_json_or_default<T>(path: &Path) -> std::io::Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str(&contents) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable file");
            Ok(T::default())
        }
    }
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    atomic_write(path, &json)?;
    Ok(())
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}
