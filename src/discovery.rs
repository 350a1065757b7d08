use crate::error::{Result, SyncError};
use crate::paths;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Canonical file name: the side that wins when both exist in a directory.
pub const PRIMARY_NAME: &str = "CLAUDE.md";
/// Mirror file name: kept identical to the primary.
pub const MIRROR_NAME: &str = "AGENTS.md";

/// A primary/mirror file pairing in one directory.
///
/// `source`/`target` record the default orientation (primary wins when
/// present); the synchronizer overrides it with whichever side actually
/// changed. `target` may not exist on disk yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPair {
    pub source: PathBuf,
    pub target: PathBuf,
    pub name: String,
}

/// Whether a changed file participates in synchronization at all.
///
/// Recognition is case-insensitive even though discovery matches exact case,
/// so a save event for `claude.md` still routes into the pipeline.
pub fn is_recognized(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.eq_ignore_ascii_case(PRIMARY_NAME) || name.eq_ignore_ascii_case(MIRROR_NAME)
        })
}

/// Discover every primary/mirror pair under `root`.
///
/// One walk, two passes over its results: every `CLAUDE.md` pairs with its
/// sibling `AGENTS.md` (present or not), then every `AGENTS.md` without a
/// sibling `CLAUDE.md` forms a pair of its own. Each directory holding
/// either file yields exactly one pair.
///
/// `.git` directories are skipped; ignore rules are NOT honored — a pair
/// inside a gitignored tree is still a pair.
pub fn discover_pairs(root: &Path) -> Result<Vec<SyncPair>> {
    let mut primaries = Vec::new();
    let mut mirrors = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");

    for result in walker {
        let entry = result.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            SyncError::WalkFailure { path, source }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) if name == PRIMARY_NAME => primaries.push(entry.into_path()),
            Some(name) if name == MIRROR_NAME => mirrors.push(entry.into_path()),
            _ => {}
        }
    }

    let mut pairs = Vec::with_capacity(primaries.len() + mirrors.len());

    for primary in primaries {
        let dir = primary.parent().unwrap_or(root).to_path_buf();
        pairs.push(SyncPair {
            name: paths::display_name(root, &dir),
            target: dir.join(MIRROR_NAME),
            source: primary,
        });
    }

    // Standalone mirrors: only directories whose primary does not exist,
    // so no directory is registered twice.
    for mirror in mirrors {
        let dir = mirror.parent().unwrap_or(root).to_path_buf();
        let primary = dir.join(PRIMARY_NAME);
        if primary.exists() {
            continue;
        }
        pairs.push(SyncPair {
            name: paths::display_name(root, &dir),
            source: mirror,
            target: primary,
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_primary_with_mirror() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CLAUDE.md"), "a").unwrap();
        fs::write(temp.path().join("AGENTS.md"), "a").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "Root");
        assert_eq!(pairs[0].source.file_name().unwrap(), PRIMARY_NAME);
        assert_eq!(pairs[0].target.file_name().unwrap(), MIRROR_NAME);
    }

    #[test]
    fn test_discover_primary_without_mirror() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CLAUDE.md"), "a").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(!pairs[0].target.exists());
    }

    #[test]
    fn test_discover_standalone_mirror() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("AGENTS.md"), "a").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "docs");
        assert_eq!(pairs[0].source.file_name().unwrap(), MIRROR_NAME);
        assert_eq!(pairs[0].target.file_name().unwrap(), PRIMARY_NAME);
    }

    #[test]
    fn test_no_duplicate_pair_per_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CLAUDE.md"), "a").unwrap();
        fs::write(temp.path().join("AGENTS.md"), "b").unwrap();
        let nested = temp.path().join("sub");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("CLAUDE.md"), "c").unwrap();
        fs::write(nested.join("AGENTS.md"), "d").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert_eq!(pairs.len(), 2);

        let mut names: Vec<_> = pairs.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["Root", "sub"]);
    }

    #[test]
    fn test_nested_display_name() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs").join("api");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("CLAUDE.md"), "a").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert_eq!(pairs[0].name, "docs > api");
    }

    #[test]
    fn test_git_directory_skipped() {
        let temp = TempDir::new().unwrap();
        let git = temp.path().join(".git");
        fs::create_dir(&git).unwrap();
        fs::write(git.join("CLAUDE.md"), "a").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_exact_case_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("claude.md"), "a").unwrap();

        let pairs = discover_pairs(temp.path()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_is_recognized_case_insensitive() {
        assert!(is_recognized(Path::new("/p/CLAUDE.md")));
        assert!(is_recognized(Path::new("/p/claude.md")));
        assert!(is_recognized(Path::new("/p/AGENTS.md")));
        assert!(is_recognized(Path::new("/p/Agents.MD")));
        assert!(!is_recognized(Path::new("/p/README.md")));
    }
}
