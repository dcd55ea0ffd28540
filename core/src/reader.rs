use crate::journal::{JournalEntry, JournalError, parse_line};
use memchr::memchr_iter;
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs;
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

/// Parse a line, logging and dropping anything malformed.
fn parse_or_warn(line_number: u64, line: &str) -> Option<JournalEntry> {
    match parse_line(line_number, line) {
        Ok(entry) => entry,
        Err(err) => {
            tracing::warn!(error = %err, "Skipping journal line");
            None
        }
    }
}

/// Read a whole journal file. Returns the entries in file order and the byte
/// offset to resume tailing from.
pub fn read_journal_file<P: AsRef<Path>>(path: P) -> Result<(Vec<JournalEntry>, u64), JournalError> {
    let file = fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok((Vec::new(), 0));
    }
    // SAFETY: the game only ever appends to a journal; bytes we index are
    // never truncated underneath us.
    let mmap = unsafe { Mmap::map(&file)? };
    let bytes = mmap.as_ref();

    // Find all line boundaries, blank lines included so numbering matches the file
    let mut line_ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        line_ranges.push((start, end));
        start = end + 1;
    }
    // A trailing line without a newline may still be mid-write; leave it
    // for the tailer.
    let end_pos = start as u64;

    let entries: Vec<JournalEntry> = line_ranges
        .par_iter()
        .enumerate()
        .filter_map(|(idx, &(start, end))| {
            let line = String::from_utf8_lossy(&bytes[start..end]);
            parse_or_warn(idx as u64 + 1, &line)
        })
        .collect();

    tracing::debug!(entries = entries.len(), end_pos, "Read journal file");
    Ok((entries, end_pos))
}

/// Follow a journal from `start_byte`, sending each parsed entry to `tx`.
///
/// Polls every 100ms at end of file. Returns when the receiver is dropped.
pub async fn tail_journal_file<P: AsRef<Path>>(
    path: P,
    start_line: u64,
    start_byte: u64,
    tx: mpsc::Sender<JournalEntry>,
) -> Result<(), JournalError> {
    let file = File::open(&path).await?;
    let mut reader = BufReader::new(file);
    let mut idx = start_line;

    reader.seek(SeekFrom::Start(start_byte)).await?;

    // Raw bytes: a write can stop partway through a multi-byte character
    let mut buf: Vec<u8> = Vec::new();

    loop {
        let read = reader.read_until(b'\n', &mut buf).await?;
        if read == 0 || buf.last() != Some(&b'\n') {
            // No complete line yet, keep what we have and wait
            if tx.is_closed() {
                break;
            }
            sleep(Duration::from_millis(100)).await;
            continue;
        }

        idx += 1;
        let line = String::from_utf8_lossy(&buf);
        if let Some(entry) = parse_or_warn(idx, &line)
            && tx.send(entry).await.is_err()
        {
            break;
        }
        buf.clear();
    }

    Ok(())
}
