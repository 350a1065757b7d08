use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable sync events for scripting (NDJSON, one object per line).
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    Start {
        trigger: PathBuf,
        root: PathBuf,
    },
    Discovered {
        pairs: usize,
    },
    Skip {
        trigger: PathBuf,
        reason: String,
    },
    InSync {
        pair: String,
        from: PathBuf,
        to: PathBuf,
    },
    Synced {
        pair: String,
        from: PathBuf,
        to: PathBuf,
        created: bool,
        dry_run: bool,
    },
    Error {
        message: String,
    },
}

impl SyncEvent {
    /// Emit this event as JSON to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }
}
