// File validation: a candidate is accepted when it names an existing
// regular file whose extension is one of the supported image types.
// Only the extension is checked; file contents are never inspected.

use std::path::Path;

/// Image extensions accepted by the selection, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// Decides whether a candidate path may join the selection.
pub trait FileValidator {
    fn is_valid(&self, path: &str) -> bool;
}

/// Filesystem-backed validator used by the real program.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFileValidator;

impl FileValidator for ImageFileValidator {
    fn is_valid(&self, path: &str) -> bool {
        is_valid(path)
    }
}

/// Lowercased text after the last '.' of the final path segment.
///
/// A name like `.png` counts as having the extension `png`.
pub fn extension_of(path: &str) -> Option<String> {
    let name = Path::new(path).file_name()?.to_string_lossy();
    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

pub fn is_supported_extension(path: &str) -> bool {
    extension_of(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// True when `path` is an existing regular file with a supported extension.
pub fn is_valid(path: &str) -> bool {
    if path.is_empty() || !Path::new(path).is_file() {
        log::debug!("rejecting {path:?}: not a regular file");
        return false;
    }
    if !is_supported_extension(path) {
        log::debug!("rejecting {path:?}: unsupported extension");
        return false;
    }
    true
}
