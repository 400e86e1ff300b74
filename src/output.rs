//! Output formatting for line-statistics reports.
//!
//! Provides functions to format a [`LineStatsReport`] as a plain-text table or JSON.

use crate::error::{FileQueryError, Result};
use crate::types::LineStatsReport;
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Formats the report into a string.
///
/// `pretty` indents JSON output and, for tables, appends a totals line.
pub fn format_report(report: &LineStatsReport, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Table => format_table(report, pretty),
        OutputFormat::Json => format_json(report, pretty),
    }
}

/// Writes the formatted report to a file.
pub fn write_report_to_file(
    report: &LineStatsReport,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<()> {
    let content = format_report(report, format, pretty)?;
    fs::write(&path, content).map_err(|e| FileQueryError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_table(report: &LineStatsReport, pretty: bool) -> Result<String> {
    let mut out = report.to_table()?.to_string();
    if pretty {
        let totals = report.totals();
        out.push_str(&format!(
            "\n{} files, {} lines ({} source, {} blank)\n",
            totals.files, totals.total_lines, totals.source_lines, totals.blank_lines
        ));
    }
    Ok(out)
}

fn format_json(report: &LineStatsReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
