//! This program grows a parallel corpus of Italian sentences and their Dutch
//! translations, focused on diminutives and augmentatives, which is stored as
//! a tab-separated file.

mod config;
mod dataset;
mod sentences;
mod tsv;

use crate::config::Config;
use clap::Parser;
use log::LevelFilter;
use std::path::{Component, Path, PathBuf};

/// Append Italian/Dutch sentence pairs to a TSV dataset
///
/// The dataset is created if it does not exist yet. Existing rows are kept,
/// and the new ones are added after them without any deduplication, so
/// running this twice adds the same sentences twice.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Location of the dataset
    #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// TSV file with the records to be appended
    ///
    /// It must have the same `italian` and `dutch` header as the dataset. By
    /// default, a built-in list of sentences is appended.
    #[arg(short, long, default_value = None)]
    records: Option<PathBuf>,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        // Decode CLI arguments
        Args::parse().check()
    }

    /// Check decoded CLI arguments for basic sanity
    pub fn check(self) -> Result<Self> {
        if let Some(records) = &self.records {
            anyhow::ensure!(
                !same_file(records, &self.dataset),
                "the dataset cannot be its own source of new records"
            );
        }
        Ok(self)
    }
}

/// Truth that two paths designate the same file
///
/// Paths to existing files are compared after canonicalization, which
/// resolves symlinks and `..`. Otherwise, `.` components are ignored.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => {
            fn significant(path: &Path) -> Vec<Component<'_>> {
                path.components()
                    .filter(|c| *c != Component::CurDir)
                    .collect()
            }
            significant(a) == significant(b)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Set up logging
    setup_logging().map_err(|e| anyhow::format_err!("{e}"))?;

    // Decode CLI arguments
    let args = Args::parse_and_check()?;
    let config = Config::new(args);
    log::debug!("Running with {config:?}");

    // Append the new records
    let new_records = config.load_records().await?;
    let num_new = new_records.len();
    let num_rows = dataset::append_records(&config.dataset, new_records).await?;
    log::info!(
        "Appended {num_new} records to {}, which now has {num_rows} rows",
        config.dataset.display()
    );
    Ok(())
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "Datasets/Diminutives-Augmentatives-Generated-IT-NL.tsv";

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
