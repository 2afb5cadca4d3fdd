//! Command-line interface for treedump.
//!
//! With no arguments it archives the current directory into
//! `directory_contents.txt` in the current directory.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treedump::{ArchiveBuilder, ArchiveOptions, ArchiveSummary, DEFAULT_OUTPUT, archive};

/// treedump — concatenate a directory tree into one text file
#[derive(Parser)]
#[command(name = "treedump", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file, created or truncated
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Sort entries by name within each directory
    #[arg(long)]
    sort: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_options(self) -> (ArchiveOptions, bool) {
        let options = ArchiveBuilder::new(self.root)
            .output(self.output)
            .follow_links(self.follow_links)
            .sort_by_name(self.sort)
            .build();
        (options, self.json)
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, json) = cli.into_options();

    match archive(options) {
        Ok(summary) => report(&summary, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn report(summary: &ArchiveSummary, json: bool) {
    if json {
        let out = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", out);
    } else {
        println!("Done! File saved as {}", summary.output.display());
    }
}
