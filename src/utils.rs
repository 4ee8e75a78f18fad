use std::path::Path;

/// Label used for a directory when the walk enters it: its full name
pub fn directory_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        // Filesystem root has no final component
        None => path.to_string_lossy().into_owned(),
    }
}

/// Label used for a child listed inside its parent: base name without the
/// final extension
pub fn child_label(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Expand `~` and environment variables in a configured path string.
/// Strings that fail to expand are returned unchanged.
pub fn expand_path(raw: &str) -> String {
    match shellexpand::full(raw) {
        Ok(expanded) => expanded.into_owned(),
        Err(e) => {
            tracing::warn!("Could not expand path {:?}: {}", raw, e);
            raw.to_string()
        }
    }
}
