pub mod context;
pub mod directory_watcher;
pub mod game_data;
pub mod journal;
pub mod reader;
pub mod state;
pub mod tracker;

// Re-exports for convenience
pub use context::{AppConfig, ConfigError, ParsingSession};
pub use journal::{JournalEntry, JournalError, JournalEvent, StateMonitor, parse_line};
pub use state::{GameSnapshot, SessionContext};
pub use tracker::{DisplayFrame, DisplayRow, DisplaySink, Tracker, TrackingState};
