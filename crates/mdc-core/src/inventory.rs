//! Artifact inventory: which downloads/conversions already exist on disk.
//!
//! Rebuilt fresh on every invocation; never persisted. The snapshot can go
//! stale mid-run (a concurrent worker may land a file after the scan), which
//! the convert runner compensates for with a fresh existence re-check.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively lists files under `root` whose extension matches `extension`
/// (without the dot), returning their file names.
///
/// Read-only. IO errors propagate; whether an unreadable directory means
/// "empty inventory" or a hard failure is the caller's policy.
pub fn scan(root: &Path, extension: &str) -> io::Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .map(|e| e.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mp4"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.mp4"), b"x").unwrap();

        let names = scan(dir.path(), "mp4").unwrap();
        assert_eq!(
            names,
            ["a.mp4".to_string(), "b.mp4".to_string()].into_iter().collect()
        );
    }

    #[test]
    fn empty_directory_yields_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan(dir.path(), "mp3").unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(scan(&gone, "mp4").is_err());
    }
}
