use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::event::{JournalEntry, JournalEvent};
use super::JournalError;

/// Parse a single journal line.
///
/// Blank lines yield `Ok(None)`. Event names the tracker has no use for are
/// returned as [`JournalEvent::Other`] without inspecting their payload.
pub fn parse_line(line_number: u64, line: &str) -> Result<Option<JournalEntry>, JournalError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(line).map_err(|source| JournalError::Parse {
        line: line_number,
        source,
    })?;

    let timestamp = parse_timestamp(line_number, &value)?;
    let name = value
        .get("event")
        .and_then(Value::as_str)
        .ok_or(JournalError::MissingField {
            line: line_number,
            field: "event",
        })?
        .to_string();

    let event = match name.as_str() {
        "Shutdown" | "ShutDown" => JournalEvent::Shutdown,
        "Location" => JournalEvent::Location(payload(line_number, value)?),
        "FSDJump" => JournalEvent::FsdJump(payload(line_number, value)?),
        "CarrierJump" => JournalEvent::CarrierJump(payload(line_number, value)?),
        "ApproachBody" => JournalEvent::ApproachBody(payload(line_number, value)?),
        "LeaveBody" => JournalEvent::LeaveBody(payload(line_number, value)?),
        "Touchdown" => JournalEvent::Touchdown(payload(line_number, value)?),
        "Liftoff" => JournalEvent::Liftoff(payload(line_number, value)?),
        "SupercruiseEntry" => JournalEvent::SupercruiseEntry(payload(line_number, value)?),
        "SupercruiseExit" => JournalEvent::SupercruiseExit(payload(line_number, value)?),
        "FSSSignalDiscovered" => JournalEvent::FssSignalDiscovered(payload(line_number, value)?),
        "MaterialCollected" => JournalEvent::MaterialCollected(payload(line_number, value)?),
        "MaterialDiscarded" => JournalEvent::MaterialDiscarded(payload(line_number, value)?),
        "Materials" => JournalEvent::Materials(payload(line_number, value)?),
        "MaterialTrade" => JournalEvent::MaterialTrade(payload(line_number, value)?),
        _ => JournalEvent::Other(name),
    };

    Ok(Some(JournalEntry {
        line_number,
        timestamp,
        event,
    }))
}

fn parse_timestamp(line_number: u64, value: &Value) -> Result<DateTime<Utc>, JournalError> {
    let raw = value
        .get("timestamp")
        .and_then(Value::as_str)
        .ok_or(JournalError::MissingField {
            line: line_number,
            field: "timestamp",
        })?;

    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| JournalError::InvalidTimestamp {
            line: line_number,
            value: raw.to_string(),
        })
}

fn payload<T: DeserializeOwned>(line_number: u64, value: Value) -> Result<T, JournalError> {
    serde_json::from_value(value).map_err(|source| JournalError::Parse {
        line: line_number,
        source,
    })
}
