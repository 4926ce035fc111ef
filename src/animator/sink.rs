//! Render sinks for the status line
//!
//! The animator thread is the only writer while it runs. Sinks take `&self`
//! so one can be shared between successive animator instances.

use crate::output::formatters::escape_display;
use colored::Colorize;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::sync::Mutex;

/// One rendered frame of the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub frame: String,
    pub message: String,
    /// Column width the message is padded to
    pub message_width: usize,
    /// Caller-published progress text (current candidate)
    pub detail: String,
}

impl StatusLine {
    /// Unstyled text of the line
    #[must_use]
    pub fn plain(&self) -> String {
        format!(
            "{} {:<width$}{}",
            self.frame,
            self.message,
            self.detail,
            width = self.message_width
        )
    }

    /// Width in terminal cells, counting one cell per char
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.plain().chars().count()
    }

    /// Shrink the line to fit strictly inside `columns` cells
    ///
    /// The last column stays free so the cursor never wraps. The detail keeps
    /// its tail, the newest characters of the candidate; the message is cut
    /// only when the frame and message alone overflow.
    #[must_use]
    pub fn fit(&self, columns: usize) -> Self {
        let budget = columns.saturating_sub(1);
        let head = self.frame.chars().count() + 1;
        let message_room = budget.saturating_sub(head);

        let message: String = self.message.chars().take(message_room).collect();
        let message_width = self.message_width.min(message_room);
        let used = head + message_width.max(message.chars().count());

        let detail_room = budget.saturating_sub(used);
        let skip = self.detail.chars().count().saturating_sub(detail_room);

        Self {
            frame: self.frame.clone(),
            message,
            message_width,
            detail: self.detail.chars().skip(skip).collect(),
        }
    }
}

/// Column count assumed when the terminal size is unavailable
const FALLBACK_COLUMNS: usize = 80;

fn terminal_columns() -> usize {
    terminal::size().map_or(FALLBACK_COLUMNS, |(columns, _)| usize::from(columns))
}

/// Destination for status line renders
pub trait RenderSink: Send + Sync {
    /// Overwrite the current line with `line`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn render(&self, line: &StatusLine) -> io::Result<()>;

    /// Blank `width` cells of the current line and return to column 0
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn clear(&self, width: usize) -> io::Result<()>;
}

/// Renders to stdout, rewriting one line in place
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSink;

impl RenderSink for TerminalSink {
    fn render(&self, line: &StatusLine) -> io::Result<()> {
        let line = line.fit(terminal_columns());
        let mut out = io::stdout().lock();
        let message = format!("{:<width$}", line.message, width = line.message_width);
        queue!(
            out,
            MoveToColumn(0),
            Print(line.frame.bright_cyan().bold()),
            Print(' '),
            Print(message.dimmed()),
            Print(escape_display(&line.detail).bright_cyan()),
            Clear(ClearType::UntilNewLine)
        )?;
        out.flush()
    }

    fn clear(&self, _width: usize) -> io::Result<()> {
        let mut out = io::stdout().lock();
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        out.flush()
    }
}

/// A recorded sink write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Line(String),
    Clear(usize),
}

/// Records every write in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SinkEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded writes, oldest first
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Rendered lines only
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Line(line) => Some(line),
                SinkEvent::Clear(_) => None,
            })
            .collect()
    }

    /// Number of clears, one per stopped animator instance
    pub fn clear_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, SinkEvent::Clear(_)))
            .count()
    }

    fn push(&self, event: SinkEvent) -> io::Result<()> {
        self.events
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?
            .push(event);
        Ok(())
    }
}

impl RenderSink for MemorySink {
    fn render(&self, line: &StatusLine) -> io::Result<()> {
        self.push(SinkEvent::Line(line.plain()))
    }

    fn clear(&self, width: usize) -> io::Result<()> {
        self.push(SinkEvent::Clear(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(detail: &str) -> StatusLine {
        StatusLine {
            frame: "⠋".to_string(),
            message: "Probing".to_string(),
            message_width: 10,
            detail: detail.to_string(),
        }
    }

    #[test]
    fn plain_pads_message() {
        assert_eq!(line("ab").plain(), "⠋ Probing   ab");
    }

    #[test]
    fn display_width_counts_chars() {
        // frame + space + padded message + detail
        assert_eq!(line("abc").display_width(), 1 + 1 + 10 + 3);
    }

    #[test]
    fn fit_keeps_short_lines_intact() {
        let original = line("abc");
        assert_eq!(original.fit(80), original);
    }

    #[test]
    fn fit_keeps_detail_tail_within_columns() {
        let candidate: String = (0..150u8).map(|i| char::from(b'a' + i % 26)).collect();
        let long = line(&candidate);
        let fitted = long.fit(80);

        assert!(fitted.display_width() < 80);
        assert!(long.detail.ends_with(&fitted.detail));
        assert_eq!(fitted.message, long.message);
        assert_eq!(fitted.display_width(), 79);
    }

    #[test]
    fn fit_cuts_message_on_tiny_terminals() {
        let fitted = line("abcdef").fit(6);
        assert!(fitted.display_width() <= 5);
        assert!(fitted.detail.is_empty());
        assert_eq!(fitted.plain(), "⠋ Pro");
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.render(&line("a")).unwrap();
        sink.render(&line("b")).unwrap();
        sink.clear(14).unwrap();

        assert_eq!(sink.lines().len(), 2);
        assert_eq!(sink.clear_count(), 1);
        assert_eq!(sink.events().last(), Some(&SinkEvent::Clear(14)));
    }
}
