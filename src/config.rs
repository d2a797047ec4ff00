//! Run configuration

use crate::{dataset::Table, sentences, tsv, Args, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Final process configuration
///
/// This is the result of digesting [`Args`]. Please refer to [`Args`] to know
/// more about the meaning of each setting.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Dataset that records are appended to
    pub dataset: PathBuf,

    /// Where the records to be appended come from
    pub records: RecordSource,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub(crate) fn new(args: Args) -> Self {
        let Args { dataset, records } = args;
        Self {
            dataset,
            records: records.map_or(RecordSource::Builtin, RecordSource::File),
        }
    }

    /// Load the records that should be appended to the dataset
    pub async fn load_records(&self) -> Result<Table> {
        match &self.records {
            RecordSource::Builtin => Ok(sentences::builtin()),
            RecordSource::File(path) => load_records_file(path).await,
        }
    }
}

/// Source of new records
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RecordSource {
    /// Sentences that are built into this program
    Builtin,

    /// TSV file with the same layout as the dataset
    File(PathBuf),
}

/// Load new records from a TSV file, which unlike the dataset must exist
async fn load_records_file(path: &Path) -> Result<Table> {
    tsv::read_table(path)
        .await?
        .with_context(|| format!("record file {} does not exist", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_DATASET_PATH;
    use clap::Parser;

    fn args<'a>(cli: impl IntoIterator<Item = &'a str>) -> Args {
        Args::try_parse_from(std::iter::once::<&'a str>("tsv-append").chain(cli)).unwrap()
    }

    fn config(cli: &[&str]) -> Config {
        Config::new(args(cli.iter().copied()))
    }

    #[test]
    fn dataset_is_not_a_record_source() {
        assert!(args(["-d", "d.tsv", "-r", "d.tsv"]).check().is_err());
        assert!(args(["-d", "d.tsv", "-r", "./d.tsv"]).check().is_err());
        assert!(args(["-d", "./Datasets/./d.tsv", "-r", "Datasets/d.tsv"]).check().is_err());
        assert!(args(["-d", "d.tsv", "-r", "new.tsv"]).check().is_ok());
        assert!(args(["-d", "d.tsv"]).check().is_ok());
    }

    #[test]
    fn dataset_is_not_a_record_source_via_other_spelling() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let dataset = dir.path().join("d.tsv");
        std::fs::write(&dataset, "italian\tdutch\na\tb\n").unwrap();
        let detour = dir.path().join("sub").join("..").join("d.tsv");
        let other = dir.path().join("new.tsv");
        std::fs::write(&other, "italian\tdutch\nc\td\n").unwrap();

        let dataset = dataset.to_str().unwrap();
        assert!(args(["-d", dataset, "-r", detour.to_str().unwrap()]).check().is_err());
        assert!(args(["-d", dataset, "-r", other.to_str().unwrap()]).check().is_ok());
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.dataset, Path::new(DEFAULT_DATASET_PATH));
        assert_eq!(config.records, RecordSource::Builtin);
    }

    #[test]
    fn overrides() {
        let config = config(&["--dataset", "out.tsv", "-r", "new.tsv"]);
        assert_eq!(config.dataset, Path::new("out.tsv"));
        assert_eq!(config.records, RecordSource::File("new.tsv".into()));
    }

    #[tokio::test]
    async fn builtin_records() {
        let records = config(&[]).load_records().await.unwrap();
        assert_eq!(records, sentences::builtin());
    }

    #[tokio::test]
    async fn records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.tsv");
        tokio::fs::write(&path, "italian\tdutch\nc\td\ne\tf\n").await.unwrap();

        let config = Config {
            dataset: dir.path().join("dataset.tsv"),
            records: RecordSource::File(path),
        };
        let records = config.load_records().await.unwrap();
        let rows = records
            .iter()
            .map(|r| (r.italian(), r.dutch()))
            .collect::<Vec<_>>();
        assert_eq!(rows, [("c", "d"), ("e", "f")]);
    }

    #[tokio::test]
    async fn missing_records_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            dataset: dir.path().join("dataset.tsv"),
            records: RecordSource::File(dir.path().join("new.tsv")),
        };
        assert!(config.load_records().await.is_err());
    }
}
