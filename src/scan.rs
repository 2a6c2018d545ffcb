//! Discovery of fixable files in the scanned directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Filename suffixes eligible for fixing: C/C++ sources and headers.
const SOURCE_SUFFIXES: &[&str] = &[".cpp", ".h"];

/// List the names of regular files directly in `dir` whose names end in a
/// fixable suffix. Subdirectories are not traversed. Sorted by name so runs
/// process files in a stable order regardless of platform listing order.
pub fn source_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}
