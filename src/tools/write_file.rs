use crate::error::PatchError;
use std::fs;
use std::path::Path;

// Truncates and overwrites in place. No temp file, no backup.
pub fn write_text(path: &Path, content: &str) -> Result<(), PatchError> {
    fs::write(path, content.as_bytes()).map_err(|e| PatchError::writing(path, e))
}
