//! URL modeling and filename derivation.
//!
//! Derives safe local filenames from the URL path, sanitized for Linux
//! filesystems.

mod sanitize;

pub use sanitize::sanitize_filename;

/// Derives a safe filename for saving a download.
///
/// Uses the path segment after the final `/` of `url` (query and fragment
/// excluded), sanitized for Linux. Returns `None` when the URL yields no
/// usable name: a bare host, a path ending in `/`, or a segment that
/// sanitizes away entirely. Callers must treat `None` as a naming failure
/// rather than writing into the folder itself.
pub fn derive_filename(url: &str) -> Option<String> {
    let raw = last_path_segment(url)?;
    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        None
    } else {
        Some(sanitized)
    }
}

/// Extracts the path segment strictly after the final `/` of a URL.
///
/// Returns `None` if the URL cannot be parsed, or the segment is empty
/// (root path, or a path ending in `/`).
fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}
