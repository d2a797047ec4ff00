//! In-memory sentence table and the append-and-save cycle

use crate::{tsv, Result};
use serde::Deserialize;
use std::path::Path;

/// Italian sentence and its Dutch translation
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
pub struct Record {
    /// Italian sentence
    italian: Box<str>,

    /// Dutch translation
    dutch: Box<str>,
}
//
impl Record {
    /// Pair up a sentence with its translation
    pub fn new(italian: impl Into<Box<str>>, dutch: impl Into<Box<str>>) -> Self {
        Self {
            italian: italian.into(),
            dutch: dutch.into(),
        }
    }

    /// Italian sentence
    pub fn italian(&self) -> &str {
        &self.italian
    }

    /// Dutch translation
    pub fn dutch(&self) -> &str {
        &self.dutch
    }

    /// Make sure that this record can be stored in a TSV file
    ///
    /// Fields are not quoted, so a tab or line break inside of a sentence
    /// would silently shift or split columns.
    pub fn check_writable(&self) -> Result<()> {
        for field in [&self.italian, &self.dutch] {
            anyhow::ensure!(
                !field.contains(['\t', '\n', '\r']),
                "sentence {field:?} contains a tab or line break"
            );
        }
        Ok(())
    }
}

/// Ordered collection of records, in file order
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Table(Vec<Record>);
//
impl Table {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Truth that there are no records
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a record at the end
    pub fn push(&mut self, record: Record) {
        self.0.push(record)
    }

    /// Add records at the end, after those already present
    pub fn append(&mut self, records: Table) {
        self.0.extend(records.0)
    }

    /// Iterate over records in order
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.0.iter()
    }
}
//
impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Append records to the dataset at `path`, creating it if needed
///
/// Existing rows are kept as-is and in order, new records come after them.
/// Nothing is deduplicated, so running this twice appends the records twice.
/// The whole file is rewritten, which is not atomic.
///
/// Returns the number of rows in the dataset after the append.
pub async fn append_records(path: &Path, new_records: Table) -> Result<usize> {
    anyhow::ensure!(!new_records.is_empty(), "no records to append");
    for record in new_records.iter() {
        record.check_writable()?;
    }

    // Load what's already there, if anything
    let mut table = match tsv::read_table(path).await? {
        Some(table) => {
            log::info!("Appending to {} existing rows in {}", table.len(), path.display());
            table
        }
        None => {
            log::info!("Starting a new dataset at {}", path.display());
            Table::new()
        }
    };

    // Add the new records and save the result
    for record in new_records.iter() {
        log::trace!("Appending {record:?}");
    }
    table.append(new_records);
    tsv::write_table(path, &table).await?;
    Ok(table.len())
}
