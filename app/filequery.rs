//! Command-line interface for filequery.
//!
//! This binary counts total, source and blank lines of every file with a given
//! extension below a project directory, and prints them as a table or JSON.

use clap::{Parser, ValueEnum};
use filequery::output::{self, format_report, write_report_to_file};
use filequery::{LineStatsReport, WalkOptions, collect_line_stats};
use std::path::PathBuf;
use std::process::exit;

/// filequery: per-file line statistics for a project
#[derive(Parser)]
#[command(name = "filequery", version, about, long_about = None)]
struct Cli {
    /// Project directory
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// File extension to look for (without the dot)
    #[arg(long)]
    ext: String,

    /// Directories to exclude, comma separated
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Pretty output (indented JSON, or a totals line under the table)
    #[arg(short, long)]
    pretty: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => output::OutputFormat::Table,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn walk_options(&self) -> WalkOptions {
        let builder = WalkOptions::builder()
            .include_hidden(!self.no_hidden)
            .respect_gitignore(self.gitignore);
        match self.max_depth {
            Some(depth) => builder.max_depth(depth),
            None => builder.no_limit_depth(),
        }
        .build()
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.walk_options();
    let excluded: Vec<PathBuf> = cli
        .exclude
        .iter()
        .filter(|path| !path.as_os_str().is_empty())
        .cloned()
        .collect();

    match collect_line_stats(&cli.dir, &cli.ext, excluded, &options) {
        Ok(report) => output_report(&report, cli.format.into(), cli.pretty, cli.output.as_ref()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_report(
    report: &LineStatsReport,
    format: output::OutputFormat,
    pretty: bool,
    destination: Option<&PathBuf>,
) {
    let result = match destination {
        Some(path) => write_report_to_file(report, format, path, pretty),
        None => format_report(report, format, pretty).map(|out| {
            print!("{}", out);
            if !out.ends_with('\n') {
                println!();
            }
        }),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
