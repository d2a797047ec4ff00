//! Reading and writing of tab-separated dataset files
//!
//! The on-disk format is deliberately dumb: a header line, then one record
//! per line, with fields separated by a single tab. There is no quoting, so
//! quote characters are ordinary text and existing lines survive a
//! read/write cycle byte for byte. In exchange, fields cannot contain tabs or
//! line breaks (see [`Record::check_writable`]).

use crate::{
    dataset::{Record, Table},
    Result,
};
use anyhow::Context;
use csv_async::{AsyncReaderBuilder, AsyncWriterBuilder, QuoteStyle};
use futures::stream::StreamExt;
use std::{io::ErrorKind, path::Path};
use tokio::fs::File;

/// Column names, in file order
pub const HEADER: [&str; 2] = ["italian", "dutch"];

/// Load a table from disk
///
/// Returns `Ok(None)` if there is no file at `path`. Any other problem,
/// including a header that doesn't match [`HEADER`], is an error.
pub async fn read_table(path: &Path) -> Result<Option<Table>> {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("opening {}", path.display()));
        }
    };

    // Set up a TSV decoder and check the schema before decoding rows
    let mut deserializer = AsyncReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .create_deserializer(file);
    let header = deserializer
        .headers()
        .await
        .with_context(|| format!("reading the header of {}", path.display()))?;
    anyhow::ensure!(
        header.iter().eq(HEADER),
        "{} has columns {:?}, expected {HEADER:?}",
        path.display(),
        header.iter().collect::<Vec<_>>(),
    );

    // Collect the rows
    let mut table = Table::new();
    let mut records = deserializer.into_deserialize::<Record>();
    while let Some(record) = records.next().await {
        table.push(record.with_context(|| format!("decoding a row of {}", path.display()))?);
    }
    log::debug!("Read {} rows from {}", table.len(), path.display());
    Ok(Some(table))
}

/// Save a table to disk, replacing whatever was at `path`
///
/// Every record is checked with [`Record::check_writable`] before the file is
/// touched. Rows from [`read_table`] always pass, and `append_records` checks
/// new records up front, so this only matters for other callers.
pub async fn write_table(path: &Path, table: &Table) -> Result<()> {
    let context = || format!("writing {}", path.display());
    for record in table.iter() {
        record.check_writable().with_context(context)?;
    }

    // FIXME: Write to a sibling temporary file, then rename it over `path`,
    //        so that a crash can't leave a truncated dataset behind
    let file = File::create(path).await.with_context(context)?;
    let mut writer = AsyncWriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .create_writer(file);
    writer.write_record(HEADER).await.with_context(context)?;
    for record in table.iter() {
        writer
            .write_record([record.italian(), record.dutch()])
            .await
            .with_context(context)?;
    }
    writer.flush().await.with_context(context)?;
    log::debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
