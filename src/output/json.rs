//! JSON output formatter for machine processing
//!
//! Writes the report as-is: `{"updates": [...], "ignored": [...], "errors": [...]}`.

use crate::domain::Report;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResolvedVersion, UpgradeCandidate};
    use serde_json::Value;

    fn render(report: &Report) -> String {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(
            render(&Report::new()),
            "{\n  \"updates\": [],\n  \"ignored\": [],\n  \"errors\": []\n}\n"
        );
    }

    #[test]
    fn test_full_report() {
        let mut report = Report::new();
        report.add_update(UpgradeCandidate::new(
            "lodash",
            ResolvedVersion::parse("1.2.3").unwrap(),
            ResolvedVersion::parse("1.9.0").unwrap(),
            false,
        ));
        report.add_ignored("react");
        report.add_error("No latest version found for bar");

        let parsed: Value = serde_json::from_str(&render(&report)).unwrap();
        assert_eq!(parsed["updates"][0]["name"], "lodash");
        assert_eq!(parsed["updates"][0]["current"], "1.2.3");
        assert_eq!(parsed["updates"][0]["latest"], "1.9.0");
        assert_eq!(parsed["updates"][0]["type"], "minor");
        assert_eq!(parsed["updates"][0]["canUpdate"], true);
        assert_eq!(parsed["ignored"][0], "react");
        assert_eq!(parsed["errors"][0], "No latest version found for bar");
    }

    #[test]
    fn test_output_round_trips_to_report() {
        let mut report = Report::new();
        report.add_ignored("a");
        let parsed: Report = serde_json::from_str(&render(&report)).unwrap();
        assert_eq!(parsed, report);
    }
}
