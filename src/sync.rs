use crate::discovery::SyncPair;
use crate::error::{Result, SyncError};
use crate::hash;
use crate::normalize::normalize;
use crate::paths;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// What a single run did to a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Destination already canonically equal to the source; nothing written.
    InSync { from: PathBuf, to: PathBuf },
    /// Destination overwritten (or newly created) with the source's content.
    Synced {
        from: PathBuf,
        to: PathBuf,
        created: bool,
    },
}

impl SyncOutcome {
    /// Direction taken, rendered as "CLAUDE.md → AGENTS.md".
    pub fn direction(&self) -> String {
        let (from, to) = match self {
            SyncOutcome::InSync { from, to } | SyncOutcome::Synced { from, to, .. } => (from, to),
        };
        format!("{} → {}", file_name(from), file_name(to))
    }
}

fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}

pub struct Synchronizer {
    dry_run: bool,
}

impl Synchronizer {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Copy the triggering side of `pair` over the other side.
    ///
    /// Whichever pair side equals the trigger is the source for this run;
    /// the pair's recorded orientation is a default only. A missing
    /// destination is created, a missing trigger is an error. At most one
    /// file write happens per run.
    pub fn sync_pair(&self, pair: &SyncPair, trigger: &Path) -> Result<SyncOutcome> {
        tracing::info!("Processing synchronization for {} files", pair.name);

        let trigger = paths::resolve(trigger);
        let (from, to) = if paths::resolve(&pair.source) == trigger {
            (pair.source.clone(), pair.target.clone())
        } else {
            (pair.target.clone(), pair.source.clone())
        };

        if !from.exists() {
            return Err(SyncError::SourceFileMissing { path: from });
        }

        let content = fs::read_to_string(&from).map_err(|e| SyncError::ReadFailure {
            path: from.clone(),
            source: e,
        })?;

        // Byte-identical files need no normalization pass; a raw-digest
        // match on the destination is already "in sync".
        let source_digest = hash::digest(content.as_bytes());
        if hash::file_digest(&to)? == Some(source_digest) {
            tracing::info!(
                "Files are already in sync ({} → {})",
                file_name(&from),
                file_name(&to)
            );
            return Ok(SyncOutcome::InSync { from, to });
        }

        let created = !to.exists();
        if !created {
            let target_content = fs::read_to_string(&to).map_err(|e| SyncError::ReadFailure {
                path: to.clone(),
                source: e,
            })?;
            if normalize(&content) == normalize(&target_content) {
                tracing::info!(
                    "Files are already in sync ({} → {})",
                    file_name(&from),
                    file_name(&to)
                );
                return Ok(SyncOutcome::InSync { from, to });
            }
        }

        if self.dry_run {
            tracing::info!("Would update: {}", to.display());
            return Ok(SyncOutcome::Synced { from, to, created });
        }

        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::WriteFailure {
                path: to.clone(),
                source: e,
            })?;
        }
        fs::write(&to, &content).map_err(|e| SyncError::WriteFailure {
            path: to.clone(),
            source: e,
        })?;

        tracing::info!(
            "Successfully synchronized {} ({} → {})",
            pair.name,
            file_name(&from),
            file_name(&to)
        );
        tracing::info!("Updated: {}", to.display());

        Ok(SyncOutcome::Synced { from, to, created })
    }
}
