use crate::context::AppConfig;
use crate::journal::{JournalEntry, StateMonitor};
use crate::state::GameSnapshot;
use crate::tracker::{DisplayFrame, DisplaySink, Tracker};
use chrono::{DateTime, NaiveDateTime, Utc};
use matfarm_types::TrackerConfig;
use std::path::{Path, PathBuf};

/// One journal being followed: the monitor that rebuilds game state, the
/// tracker fed from it, and the sinks that get a frame whenever it changes.
pub struct ParsingSession {
    pub current_byte: Option<u64>,
    pub current_line: u64,
    pub active_file: Option<PathBuf>,
    pub game_session_date: Option<NaiveDateTime>,
    monitor: StateMonitor,
    tracker: Tracker,
    sinks: Vec<Box<dyn DisplaySink + Send>>,
}

impl ParsingSession {
    pub fn new(path: PathBuf, config: TrackerConfig) -> Self {
        let date_stamp = parse_journal_timestamp(&path);
        Self {
            current_byte: None,
            current_line: 0,
            active_file: Some(path),
            game_session_date: date_stamp,
            monitor: StateMonitor::new(),
            tracker: Tracker::new(config),
            sinks: Vec::new(),
        }
    }

    /// Move on to the next journal part. Game state, tracker and sinks carry
    /// over; only the file position starts again.
    pub fn switch_file(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "Switching journal");
        self.game_session_date = parse_journal_timestamp(&path);
        self.active_file = Some(path);
        self.current_byte = None;
        self.current_line = 0;
    }

    /// Whether `path` is the journal already being followed
    pub fn is_following(&self, path: &Path) -> bool {
        self.active_file.as_deref() == Some(path)
    }

    /// Register a sink to receive display frames
    pub fn add_sink(&mut self, sink: Box<dyn DisplaySink + Send>) {
        self.sinks.push(sink);
    }

    /// Process a live entry, with `now` taken from the wall clock.
    /// Returns true if a frame was rendered.
    pub fn process_entry(&mut self, entry: &JournalEntry, now: DateTime<Utc>) -> bool {
        self.current_line = self.current_line.max(entry.line_number);
        self.monitor.apply(entry);
        let changed = self
            .tracker
            .handle_entry(entry, self.monitor.snapshot(), now);
        if changed {
            self.render(now);
        }
        changed
    }

    /// Replay entries using their own timestamps as the clock, sweeping
    /// expired rows before each one. Returns the number of frame changes.
    pub fn process_entries(&mut self, entries: &[JournalEntry]) -> usize {
        let mut changes = 0;
        for entry in entries {
            if self.tick(entry.timestamp) {
                changes += 1;
            }
            if self.process_entry(entry, entry.timestamp) {
                changes += 1;
            }
        }
        changes
    }

    /// Expiry sweep. Returns true if a frame was rendered.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let changed = self.tracker.expire(now);
        if changed {
            self.render(now);
        }
        changed
    }

    pub fn frame(&self, now: DateTime<Utc>) -> DisplayFrame {
        self.tracker.frame(now)
    }

    /// Push the current frame to every sink.
    pub fn render(&mut self, now: DateTime<Utc>) {
        let frame = self.tracker.frame(now);
        for sink in &mut self.sinks {
            sink.render(&frame);
        }
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        self.monitor.snapshot()
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

/// Session start time from a journal file name.
///
/// Handles both `Journal.2025-03-14T190512.01.log` and the older
/// `Journal.250314190512.01.log` form.
fn parse_journal_timestamp(path: &Path) -> Option<NaiveDateTime> {
    let name = path.file_name()?.to_str()?;
    let stamp = name.strip_prefix("Journal.")?.split('.').next()?;
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H%M%S")
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, "%y%m%d%H%M%S"))
        .ok()
}

/// Resolve a journal path, joining with journal_directory if relative.
pub fn resolve_journal_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config.journal_dir().join(path)
    }
}
