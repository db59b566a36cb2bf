//! Path derivation and filesystem identity helpers

use std::path::{Component, Path, PathBuf};

/// Append `.pdf` to a folio unless it already ends with it (any case)
pub fn ensure_pdf_suffix(id: &str) -> String {
    let id = id.trim();
    if id.to_lowercase().ends_with(".pdf") {
        id.to_string()
    } else {
        format!("{}.pdf", id)
    }
}

/// Turn a CSV folder segment into a relative path.
///
/// Both `/` and `\` separate components so tables written on Windows work
/// everywhere. Empty segments are dropped.
pub fn split_relative(relative_path: &str) -> PathBuf {
    relative_path
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Absolute path with symlinks and `.`/`..` resolved.
///
/// The deepest existing ancestor is canonicalized and the remaining
/// components are applied lexically, so paths that do not exist yet still
/// resolve.
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let components: Vec<Component> = absolute.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if let Ok(canonical) = prefix.canonicalize() {
            return push_lexically(canonical, &components[split..]);
        }
    }

    push_lexically(PathBuf::new(), &components)
}

/// Whether both paths exist and resolve to the same filesystem entry
pub fn same_entity(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether anything, including a dangling symlink, sits at `path`
pub fn is_occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

fn push_lexically(mut base: PathBuf, components: &[Component]) -> PathBuf {
    for component in components {
        match component {
            Component::ParentDir => {
                base.pop();
            }
            Component::CurDir => {}
            other => base.push(other.as_os_str()),
        }
    }
    base
}
