use crate::render::TerminalSink;
use chrono::Utc;
use matfarm_core::context::ParsingSession;
use matfarm_core::directory_watcher::{self as core_watcher, DirectoryEvent, DirectoryWatcher};
use matfarm_core::reader::{read_journal_file, tail_journal_file};
use matfarm_types::TrackerConfig;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::time::{Duration, MissedTickBehavior, interval};

enum FollowOutcome {
    /// A newer journal appeared
    Switch(PathBuf),
    Stop,
}

/// Follow the newest journal in `dir` until Ctrl-C, switching to each new
/// journal as the game creates it. Tracking state carries over between
/// journals.
pub async fn watch(dir: &Path, config: &TrackerConfig) -> Result<(), String> {
    let mut watcher = DirectoryWatcher::new(dir).map_err(|e| e.to_string())?;
    let first = match core_watcher::latest_journal(dir).map_err(|e| e.to_string())? {
        Some(path) => path,
        None => {
            println!("Waiting for a journal in {}", dir.display());
            match wait_for_journal(&mut watcher).await {
                Some(path) => path,
                None => return Ok(()),
            }
        }
    };

    let mut session = ParsingSession::new(first, config.clone());
    session.add_sink(Box::new(TerminalSink::stdout()));

    loop {
        match follow(&mut session, config, &mut watcher).await? {
            FollowOutcome::Switch(path) => session.switch_file(path),
            FollowOutcome::Stop => return Ok(()),
        }
    }
}

async fn wait_for_journal(watcher: &mut DirectoryWatcher) -> Option<PathBuf> {
    loop {
        tokio::select! {
            event = watcher.next_event() => match event {
                Some(DirectoryEvent::NewJournal(path)) => return Some(path),
                Some(DirectoryEvent::Error(err)) => tracing::warn!(error = %err, "Watcher error"),
                None => return None,
            },
            _ = tokio::signal::ctrl_c() => return None,
        }
    }
}

async fn follow(
    session: &mut ParsingSession,
    config: &TrackerConfig,
    watcher: &mut DirectoryWatcher,
) -> Result<FollowOutcome, String> {
    let path = session
        .active_file
        .clone()
        .ok_or_else(|| "No journal to follow".to_string())?;
    println!("Following {}", path.display());

    // Catch up on what the journal already holds
    let (entries, end_pos) = read_journal_file(&path).map_err(|e| e.to_string())?;
    session.process_entries(&entries);
    session.current_byte = Some(end_pos);
    session.tick(Utc::now());
    session.render(Utc::now());

    let (tx, mut rx) = mpsc::channel(256);
    let tail_path = path.clone();
    let start_line = session.current_line;
    let start_byte = session.current_byte.unwrap_or(0);
    let tail = tokio::spawn(async move {
        if let Err(err) = tail_journal_file(&tail_path, start_line, start_byte, tx).await {
            tracing::error!(path = %tail_path.display(), error = %err, "Journal tail failed");
        }
    });

    let mut ticker = interval(Duration::from_millis(config.expiry_tick_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let outcome = loop {
        tokio::select! {
            entry = rx.recv() => match entry {
                Some(entry) => {
                    session.process_entry(&entry, Utc::now());
                }
                None => break Err(format!("Stopped reading {}", path.display())),
            },
            _ = ticker.tick() => {
                session.tick(Utc::now());
            }
            event = watcher.next_event() => match event {
                Some(DirectoryEvent::NewJournal(next)) if !session.is_following(&next) => {
                    break Ok(FollowOutcome::Switch(next));
                }
                Some(DirectoryEvent::NewJournal(_)) => {}
                Some(DirectoryEvent::Error(err)) => tracing::warn!(error = %err, "Watcher error"),
                None => break Ok(FollowOutcome::Stop),
            },
            _ = tokio::signal::ctrl_c() => break Ok(FollowOutcome::Stop),
        }
    };

    tail.abort();
    outcome
}
