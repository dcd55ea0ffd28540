//! Journal directory discovery and watching.
//!
//! The game starts a new `Journal.<timestamp>.<part>.log` every session (and
//! splits long sessions into parts). The watcher reports each new journal so
//! the front-end can switch its tail to it.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("journal directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("failed to watch journal directory: {0}")]
    Notify(#[from] notify::Error),

    #[error("failed to list journal directory: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// A journal file appeared
    NewJournal(PathBuf),
    Error(String),
}

pub fn is_journal_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("Journal.") && name.ends_with(".log"))
}

/// Newest journal in `dir`, by modification time and then by name.
///
/// Returns `Ok(None)` for an empty or missing directory.
pub fn latest_journal(dir: &Path) -> Result<Option<PathBuf>, WatcherError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) if !dir.exists() => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_journal_file(&path) {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|metadata| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let newer = latest
            .as_ref()
            .is_none_or(|(time, latest_path)| (modified, &path) > (*time, latest_path));
        if newer {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}

/// Watches a journal directory for new journal files.
pub struct DirectoryWatcher {
    // Dropping the watcher stops notifications
    _watcher: RecommendedWatcher,
    rx: mpsc::UnboundedReceiver<notify::Result<Event>>,
}

impl DirectoryWatcher {
    pub fn new(dir: &Path) -> Result<Self, WatcherError> {
        if !dir.is_dir() {
            return Err(WatcherError::MissingDirectory(dir.to_path_buf()));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            if tx.send(result).is_err() {
                tracing::debug!("Journal watcher receiver dropped");
            }
        })?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        tracing::info!(dir = %dir.display(), "Watching journal directory");
        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Next relevant event. `None` once the watcher has shut down.
    pub async fn next_event(&mut self) -> Option<DirectoryEvent> {
        loop {
            match self.rx.recv().await? {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Create(_)) {
                        continue;
                    }
                    if let Some(path) = event.paths.into_iter().find(|path| is_journal_file(path)) {
                        return Some(DirectoryEvent::NewJournal(path));
                    }
                }
                Err(err) => return Some(DirectoryEvent::Error(err.to_string())),
            }
        }
    }
}
