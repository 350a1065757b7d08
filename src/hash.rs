use crate::error::{Result, SyncError};
use std::io::ErrorKind;
use std::path::Path;

/// BLAKE3 fingerprint of a byte buffer, hex-encoded.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(blake3::hash(bytes).as_bytes())
}

/// BLAKE3 fingerprint of a file's raw bytes.
///
/// Returns `None` for a missing file rather than an error, so callers can
/// treat "absent" as "differs" during the in-sync check.
pub fn file_digest(path: &Path) -> Result<Option<String>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SyncError::ReadFailure {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    Ok(Some(digest(&bytes)))
}
