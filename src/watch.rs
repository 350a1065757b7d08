use crate::discovery;
use crate::error::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

/// Watch mode - continuous sync on file changes.
///
/// The watcher thread only enqueues events; every sync run executes on this
/// thread, one changed path at a time, through the same single-pass pipeline
/// as a one-shot invocation.
pub struct WatchMode {
    root: PathBuf,
    debounce: Duration,
}

impl WatchMode {
    pub fn new(root: PathBuf, debounce: Duration) -> Self {
        Self { root, debounce }
    }

    /// Block and invoke `on_change` for every recognized changed file.
    ///
    /// Events are debounced so editors that write several times per save
    /// trigger one run. The write a sync run performs shows up as a fresh
    /// event for the counterpart file; the re-run it triggers lands on an
    /// in-sync pair and is a no-op.
    pub fn run<F>(&self, mut on_change: F) -> Result<()>
    where
        F: FnMut(&Path),
    {
        let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;
        watcher.watch(&self.root, RecursiveMode::Recursive)?;

        tracing::info!("Watching {} for changes", self.root.display());

        loop {
            let first = match rx.recv() {
                Ok(event) => event,
                // Watcher dropped its sender; nothing left to observe.
                Err(_) => return Ok(()),
            };

            let mut changed = HashSet::new();
            collect_changed(first, &mut changed);

            // Drain everything arriving within the debounce window.
            while let Ok(event) = rx.recv_timeout(self.debounce) {
                collect_changed(event, &mut changed);
            }

            for path in changed {
                on_change(&path);
            }
        }
    }
}

fn collect_changed(event: notify::Result<Event>, out: &mut HashSet<PathBuf>) {
    let event = match event {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Watch event error: {}", e);
            return;
        }
    };

    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return;
    }

    for path in event.paths {
        if discovery::is_recognized(&path) {
            out.insert(path);
        }
    }
}
