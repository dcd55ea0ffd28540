use crate::render::{TerminalSink, render_frame};
use matfarm_core::context::{AppConfig, ParsingSession, resolve_journal_path};
use matfarm_core::game_data::{LOCATIONS, LocationInfo, grade_to_cap};
use matfarm_core::reader::read_journal_file;
use matfarm_types::formatting::{format_cap, format_duration, format_row_label, format_thousands};
use std::path::Path;
use std::time::Instant;

/// Run a journal through the tracker and print the final frame.
pub fn replay(path: &Path, config: &AppConfig, all_frames: bool) -> Result<(), String> {
    let path = resolve_journal_path(config, path);
    let timer = Instant::now();
    let (entries, end_pos) = read_journal_file(&path).map_err(|e| e.to_string())?;
    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        bytes = end_pos,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Read journal"
    );

    let mut session = ParsingSession::new(path.clone(), config.tracker.clone());
    if all_frames {
        session.add_sink(Box::new(TerminalSink::stdout()));
    }
    let changes = session.process_entries(&entries);

    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        println!("No journal entries in {}", path.display());
        return Ok(());
    };

    if !all_frames {
        print!("{}", render_frame(&session.frame(last.timestamp)));
    }

    let span = last.timestamp.signed_duration_since(first.timestamp).num_seconds();
    let snapshot = session.snapshot();
    println!(
        "{} entries over {}, {} frame changes",
        entries.len(),
        format_duration(span),
        changes
    );
    println!(
        "Position: {} / {}",
        snapshot.system().unwrap_or("-"),
        snapshot.body().unwrap_or("-")
    );
    if let Some(date) = session.game_session_date {
        println!("Session started {}", date.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}

/// Print the fixed hotspot table, optionally for a single system.
pub fn hotspots(system: Option<&str>, config: &AppConfig) -> Result<(), String> {
    let mut locations: Vec<&LocationInfo> = LOCATIONS
        .values()
        .flat_map(|locations| locations.iter())
        .filter(|location| system.is_none_or(|name| location.system.eq_ignore_ascii_case(name)))
        .collect();
    locations.sort_by_key(|location| (location.system, location.body));

    if locations.is_empty() {
        return Err(format!("No hotspots in {}", system.unwrap_or("any system")));
    }

    for location in locations {
        println!("{} ({} / {})", location.name, location.system, location.body);
        if let Some(trader) = &location.trader {
            println!("  trader: {} / {}", trader.system, trader.station);
        }
        for material in location.materials {
            let Some(info) = material.info() else {
                continue;
            };
            let cap = grade_to_cap(info.grade, config.tracker.ungraded_cap);
            println!(
                "  {:<34} {}",
                format_row_label(info.grade, info.name),
                format_cap(cap)
            );
        }
    }
    Ok(())
}

/// Write the active config to `target`, or to the stored location.
pub fn save_settings(config: &AppConfig, target: Option<&Path>) -> Result<(), String> {
    match target {
        Some(path) => {
            config.store_at(path).map_err(|e| e.to_string())?;
            println!("Saved config to {}", path.display());
        }
        None => {
            config.store().map_err(|e| e.to_string())?;
            let path = AppConfig::path().map_err(|e| e.to_string())?;
            println!("Saved config to {}", path.display());
        }
    }
    Ok(())
}

pub fn show_settings(config: &AppConfig) -> Result<(), String> {
    match AppConfig::path() {
        Ok(path) => println!("# {}", path.display()),
        Err(err) => tracing::warn!(error = %err, "Could not resolve config path"),
    }
    let text = toml::to_string_pretty(config).map_err(|e| e.to_string())?;
    println!("{}", text.trim_end());
    println!(
        "# emissions need a population of at least {}",
        format_thousands(config.tracker.hge_min_population)
    );
    Ok(())
}
