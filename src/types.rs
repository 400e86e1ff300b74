use crate::error::Result;
use crate::table::{Cell, Table};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column headers of the table produced by [`LineStatsReport::to_table`].
pub const LINE_STATS_COLUMNS: [&str; 4] = ["Path", "Total lines", "Source lines", "Blank lines"];

/// Line counts of a single text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLineStats {
    /// Path relative to the root the statistics were collected from.
    pub path: PathBuf,
    pub total_lines: usize,
    /// Lines that are not blank.
    pub source_lines: usize,
    /// Lines that are empty or contain only whitespace.
    pub blank_lines: usize,
}

/// Sums over every file of a [`LineStatsReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    pub files: usize,
    pub total_lines: usize,
    pub source_lines: usize,
    pub blank_lines: usize,
}

/// The result of [`collect_line_stats`](crate::collect_line_stats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStatsReport {
    /// The expanded root directory.
    pub root: PathBuf,
    /// The extension that was counted, without the leading dot.
    pub extension: String,
    /// One entry per matching file, in walk order.
    pub files: Vec<FileLineStats>,
}

impl LineStatsReport {
    pub fn totals(&self) -> LineTotals {
        self.files.iter().fold(LineTotals::default(), |acc, file| LineTotals {
            files: acc.files + 1,
            total_lines: acc.total_lines + file.total_lines,
            source_lines: acc.source_lines + file.source_lines,
            blank_lines: acc.blank_lines + file.blank_lines,
        })
    }

    /// One row per file, columns as in [`LINE_STATS_COLUMNS`].
    pub fn to_table(&self) -> Result<Table> {
        let mut table = Table::new(LINE_STATS_COLUMNS)?;
        for file in &self.files {
            table.add_record([
                ("Path", Cell::from(file.path.as_path())),
                ("Total lines", Cell::from(file.total_lines)),
                ("Source lines", Cell::from(file.source_lines)),
                ("Blank lines", Cell::from(file.blank_lines)),
            ])?;
        }
        Ok(table)
    }
}
