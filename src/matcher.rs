use crate::discovery::SyncPair;
use crate::paths;
use std::path::Path;

/// Find the pair a changed file belongs to.
///
/// The changed path and both sides of every pair are resolved to canonical
/// absolute form before comparison, so relative triggers and symlinked
/// roots still match their discovered pair. Returns the first match.
pub fn find_pair<'a>(changed: &Path, pairs: &'a [SyncPair]) -> Option<&'a SyncPair> {
    let changed = paths::resolve(changed);

    pairs.iter().find(|pair| {
        paths::resolve(&pair.source) == changed || paths::resolve(&pair.target) == changed
    })
}
