//! Filesystem probing helpers.
//!
//! Read-only lookups: they stat and glob, nothing else.

use std::path::{Path, PathBuf};

use glob::glob;

use crate::util::errors::LocateError;

/// Expand a glob pattern to the directories it matches, sorted.
pub fn glob_dirs(pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
    let entries = glob(pattern).map_err(|source| LocateError::InvalidHint {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut results = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_dir() {
                    results.push(path);
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

/// Expand a glob pattern relative to a base directory.
pub fn glob_dirs_in(base: &Path, pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
    let escaped = glob::Pattern::escape(&base.to_string_lossy());
    let full_pattern = Path::new(&escaped).join(pattern);
    glob_dirs(&full_pattern.to_string_lossy())
}

/// Return the first directory (in order) that contains `file_name`.
pub fn find_in_dirs<'a>(
    dirs: impl IntoIterator<Item = &'a Path>,
    file_name: &str,
) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(file_name);
        tracing::trace!("probing {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
