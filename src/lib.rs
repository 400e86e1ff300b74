//! # filequery
//!
//! `filequery` is a library for querying a directory tree lazily: walk the files and
//! directories below a root, chain filters and projections over them, and reduce the
//! result to a list, a sum or a table. Text files expose simple statistics (characters,
//! words, lines).
//!
//! Every query starts at a [`Dir`]. Its views ([`Dir::files`], [`Dir::dirs`],
//! [`Dir::file_likes`]) walk the tree in pre-order and return a single-pass
//! [`FunctionalIterator`]. Combinators such as `filter_extension`, `exclude` or
//! `map_line_count` only build the pipeline; nothing touches the disk until a terminal
//! operation (`list`, `sum`, `for_each`, ...) pulls the elements.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use filequery::Dir;
//!
//! let root = Dir::new("~/project")?;
//!
//! let lines: usize = root
//!     .files()?
//!     .exclude(["~/project/target"])?
//!     .filter_extension("rs")
//!     .t()
//!     .map_line_count()
//!     .sum()?;
//!
//! println!("{} lines of Rust", lines);
//! # Ok::<(), filequery::FileQueryError>(())
//! ```

mod dir;
mod error;
mod file;
mod file_iterator;
mod file_like;
mod file_size;
mod functional;
mod options;
pub mod output;
pub mod paths;
mod stats;
mod table;
mod text_file;
mod types;
mod walk;

pub use dir::Dir;
pub use error::{FileQueryError, Result};
pub use file::File;
pub use file_iterator::FileIterator;
pub use file_like::{FileLike, FileLikeEntity};
pub use file_size::{FileSize, FileSizeUnit};
pub use functional::FunctionalIterator;
pub use options::{Encoding, WalkOptions, WalkOptionsBuilder};
pub use paths::{expand_path, relative_path};
pub use stats::collect_line_stats;
pub use table::{Cell, Table};
pub use text_file::{TextFile, TextFileIterator};
pub use types::{FileLineStats, LINE_STATS_COLUMNS, LineStatsReport, LineTotals};
