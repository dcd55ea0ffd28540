use matfarm_core::tracker::{DisplayFrame, DisplaySink};
use matfarm_types::formatting::format_remaining;
use std::io::{self, Write};

/// Text form of a frame, one line per row.
pub fn render_frame(frame: &DisplayFrame) -> String {
    let mut out = String::new();

    let status = if frame.status.is_empty() { "-" } else { &frame.status };
    out.push_str(&format!("[{}]\n", status));

    if let Some(trader) = &frame.trader {
        out.push_str(&format!("  trader: {} / {}\n", trader.system, trader.station));
    }

    if !frame.visible {
        return out;
    }

    let width = frame
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &frame.rows {
        let remaining = row.expires_in_secs.map(format_remaining).unwrap_or_default();
        let line = format!(
            "  {:<width$}  {:>4}{:<5} {}",
            row.label,
            row.quantity_text(),
            row.cap_text(),
            remaining,
            width = width
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Prints frames to a terminal (or any writer).
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn render(&mut self, frame: &DisplayFrame) {
        if let Err(err) = self
            .out
            .write_all(render_frame(frame).as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::warn!(error = %err, "Failed to write frame");
        }
    }
}
