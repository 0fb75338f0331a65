use anyhow::{anyhow, Result};
use std::fs::File;
use std::path::Path;

/// Opens a file, tagging any error with the kind of file being opened
/// (`"draft"`, `"project"`, ...) so the CLI's error output names what was
/// missing rather than just the path.
pub fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}
