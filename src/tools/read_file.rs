use crate::error::PatchError;
use std::fs;
use std::path::Path;

/// Reads the whole file as UTF-8. A BOM, if any, is kept as part of the text
/// so it is written back untouched.
pub fn read_text(path: &Path) -> Result<String, PatchError> {
    let bytes = fs::read(path).map_err(|e| PatchError::reading(path, e))?;

    String::from_utf8(bytes).map_err(|e| PatchError::Decode {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}
