//! Table output for human-readable display
//!
//! Columns are padded to the widest cell (with the header as a minimum) and
//! separated by a single space. Colors only touch the `Type` column, and
//! padding is always computed on the plain text.

use crate::domain::{DifferenceKind, Report, UpgradeCandidate};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

const HEADERS: [&str; 4] = ["Name", "Current", "Latest", "Type"];

/// Table formatter for terminal output
pub struct TableFormatter {
    /// Whether to use colors
    color: bool,
}

impl TableFormatter {
    /// Create a table formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn type_label(&self, kind: DifferenceKind) -> String {
        if !self.color {
            return kind.label().to_string();
        }
        match kind {
            DifferenceKind::Major => kind.label().red().bold().to_string(),
            DifferenceKind::Minor => kind.label().yellow().to_string(),
            DifferenceKind::Patch => kind.label().green().to_string(),
            DifferenceKind::None => kind.label().dimmed().to_string(),
        }
    }

    /// Render the update table (header, rule, one row per update)
    pub fn render_table(&self, updates: &[UpgradeCandidate]) -> String {
        let rows: Vec<[String; 3]> = updates
            .iter()
            .map(|u| [u.name.clone(), u.current.to_string(), u.latest.to_string()])
            .collect();

        let widths: Vec<usize> = (0..3)
            .map(|col| {
                rows.iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(HEADERS[col].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header = format!(
            "{} {} {} {}",
            pad(HEADERS[0], widths[0]),
            pad(HEADERS[1], widths[1]),
            pad(HEADERS[2], widths[2]),
            HEADERS[3]
        );
        let rule = "-".repeat(header.chars().count());

        let mut lines = vec![header, rule];
        for (row, update) in rows.iter().zip(updates) {
            lines.push(format!(
                "{} {} {} {}",
                pad(&row[0], widths[0]),
                pad(&row[1], widths[1]),
                pad(&row[2], widths[2]),
                self.type_label(update.difference)
            ));
        }
        lines.join("\n")
    }
}

/// Left-align `text` in a field of `width` characters
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

impl OutputFormatter for TableFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.has_updates() {
            writeln!(writer, "{}", self.render_table(&report.updates))?;
        } else {
            writeln!(writer, "All dependencies are up to date.")?;
        }

        if report.has_errors() {
            writeln!(writer)?;
            if self.color {
                writeln!(writer, "{}", "Errors:".red().bold())?;
            } else {
                writeln!(writer, "Errors:")?;
            }
            for error in &report.errors {
                writeln!(writer, "  {}", error)?;
            }
        }

        Ok(())
    }
}
