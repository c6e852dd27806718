//! File system scanner for custom map files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extension of raw map files.
pub const MAP_EXTENSION: &str = "map";

/// Recursively find `.map` files under `root`, sorted by path.
///
/// A missing directory yields no files.
pub fn scan_custom_maps(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_map_file(path))
        .collect();

    files.sort();
    files
}

/// Check for a `.map` extension (case-insensitive).
pub fn is_map_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MAP_EXTENSION))
}
