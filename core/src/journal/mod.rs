//! Journal ingestion: line parsing and the game-state monitor that builds
//! snapshots from the same event stream.

pub mod event;
pub mod monitor;
pub mod parser;

pub use event::{JournalEntry, JournalEvent};
pub use monitor::StateMonitor;
pub use parser::parse_line;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("I/O error reading journal: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },

    #[error("line {line}: invalid timestamp {value:?}")]
    InvalidTimestamp { line: u64, value: String },
}
