use std::path::{Component, Path, PathBuf};

/// Resolve a path to canonical absolute form.
///
/// Unlike `fs::canonicalize` this tolerates a final component that does not
/// exist yet (the empty side of a half-populated pair): the parent directory
/// is canonicalized and the file name re-appended. When nothing on the path
/// exists, falls back to a lexical cleanup against the current directory.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        if let Ok(parent) = parent.canonicalize() {
            return parent.join(name);
        }
    }

    lexical_absolute(path)
}

fn lexical_absolute(path: &Path) -> PathBuf {
    let mut out = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().unwrap_or_default()
    };

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }

    out
}

/// Human-readable name for a pair directory, relative to the project root.
///
/// The root itself renders as "Root"; nested directories render their
/// root-relative segments joined with " > " (e.g. "docs > api").
pub fn display_name(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => "Root".to_string(),
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" > "),
        // Pair directory outside the root; show it verbatim.
        Err(_) => dir.display().to_string(),
    }
}
