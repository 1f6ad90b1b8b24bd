//! Plain text output formatting.
//!
//! Every line is rendered to a `String` first and then written with a single
//! `writeln!` on a locked stdout, so lines from different phases or tasks
//! never interleave mid-line.

use super::category::{StatusCategory, LIME, RESET};
use crate::prober::{StatusMap, UNREACHABLE_STATUS};
use crate::scanner::OpenPortEvent;
use console::style;
use std::io::{self, Write};
use tokio::sync::mpsc;

/// Renders probe results as colored terminal lines.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    colored: bool,
}

impl Presenter {
    /// Create a presenter. With `colored` false no escape codes are emitted.
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Render one status result, or `None` when it is suppressed.
    ///
    /// Results equal to [`UNREACHABLE_STATUS`] are never shown.
    pub fn status_line(&self, url: &str, status: u16) -> Option<String> {
        if status == UNREACHABLE_STATUS {
            return None;
        }

        let text = format!("{} : {}", url, status);
        Some(match StatusCategory::classify(status).color() {
            Some(color) => self.paint(color, &text),
            None => text,
        })
    }

    /// Render one open-port event.
    pub fn port_line(&self, event: &OpenPortEvent) -> String {
        let text = format!("{} is accessible on port {}", event.target, event.port);
        self.paint(LIME, &text)
    }

    /// Write every non-suppressed status result, sorted by URL.
    ///
    /// Returns the number of lines written.
    pub fn write_statuses<W: Write>(&self, out: &mut W, results: &StatusMap) -> io::Result<usize> {
        let mut entries: Vec<(&String, &u16)> = results.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut written = 0;
        for (url, &status) in entries {
            if let Some(line) = self.status_line(url, status) {
                writeln!(out, "{}", line)?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Write status results to stdout.
    pub fn print_statuses(&self, results: &StatusMap) -> io::Result<usize> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let written = self.write_statuses(&mut out, results)?;
        out.flush()?;
        Ok(written)
    }

    /// Write one open-port line.
    pub fn write_open_port<W: Write>(&self, out: &mut W, event: &OpenPortEvent) -> io::Result<()> {
        writeln!(out, "{}", self.port_line(event))
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colored {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Print open-port events to stdout until the channel closes.
///
/// Returns the number of events printed.
pub async fn print_port_events(
    presenter: Presenter,
    mut events: mpsc::Receiver<OpenPortEvent>,
) -> io::Result<usize> {
    let mut printed = 0;
    while let Some(event) = events.recv().await {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        presenter.write_open_port(&mut out, &event)?;
        out.flush()?;
        printed += 1;
    }
    Ok(printed)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
