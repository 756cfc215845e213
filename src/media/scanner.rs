//! Folder scanning for gallery imports

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Image extensions the decoder understands
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check whether `path` looks like a decodable image
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|ext| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Collect image files under `root`, sorted by path
pub fn discover_image_files(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(true);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| is_image_file(p))
        .collect();
    files.sort();
    files
}
