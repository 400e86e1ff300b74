//! Per-file line statistics for every text file with a given extension.

use crate::dir::Dir;
use crate::error::Result;
use crate::file_like::FileLike;
use crate::options::WalkOptions;
use crate::paths::relative_path;
use crate::types::{FileLineStats, LineStatsReport};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Count total, blank and source lines of every `*.{extension}` file below
/// `root`, skipping anything inside `excluded`.
///
/// Files are visited in walk order. The first file that cannot be read or
/// decoded aborts the whole collection.
pub fn collect_line_stats<I, P>(
    root: impl AsRef<Path>,
    extension: &str,
    excluded: I,
    options: &WalkOptions,
) -> Result<LineStatsReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let root = Dir::new(root)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Collecting line stats for *.{} in {}", extension, root.path().display());
    let root_path = root.path().to_path_buf();
    let files = root
        .files_with(options)?
        .exclude(excluded)?
        .filter_extension(extension)
        .text_file_iterator()
        .try_map(move |file| {
            let total_lines = file.line_count()?;
            let blank_lines = file.blank_line_count()?;
            Ok(FileLineStats {
                path: relative_path(file.path(), &root_path)?,
                total_lines,
                source_lines: total_lines - blank_lines,
                blank_lines,
            })
        })
        .list()?;
    Ok(LineStatsReport {
        root: root.path().to_path_buf(),
        extension: extension.to_owned(),
        files,
    })
}
