//! Export file discovery

use std::path::{Path, PathBuf};
use tagdive_core::{Error, Result};
use walkdir::WalkDir;

/// Locate the export CSV anywhere under `root`. Exports sometimes land in a
/// dated subfolder, so the whole tree is searched; the first match in walk
/// order is used when several exist.
pub fn find_export(root: &Path, file_name: &str) -> Result<PathBuf> {
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && entry.file_name().to_string_lossy() == file_name {
            return Ok(entry.path().to_path_buf());
        }
    }

    Err(Error::ExportNotFound {
        name: file_name.to_string(),
        root: root.to_path_buf(),
    })
}
