//! Word-frequency lookup tables (SUBTLEX-US `SUBTLWF` and Zipf-scale values).
//!
//! A table is read once into a word -> value map; lookups are exact and case-sensitive.
//! Words missing from a table contribute nothing to the corpus-weighted metrics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::AppError;

/// Column holding the word in every frequency table.
pub const WORD_COLUMN: &str = "Word";

/// Which frequency scale a table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusScale {
    /// SUBTLEX-US frequency per million words.
    Subtlwf,
    /// Zipf-scale frequency.
    Zipf,
}

impl CorpusScale {
    /// Name of the numeric column for this scale.
    pub fn column(&self) -> &'static str {
        match self {
            CorpusScale::Subtlwf => "SUBTLWF",
            CorpusScale::Zipf => "Zipf-value",
        }
    }
}

/// Word -> frequency value for one scale.
#[derive(Debug, Clone)]
pub struct CorpusTable {
    scale: CorpusScale,
    values: HashMap<String, f64>,
}

impl CorpusTable {
    /// Builds a table from (word, value) pairs. Repeated words keep their first value.
    pub fn from_pairs<W, I>(scale: CorpusScale, pairs: I) -> Self
    where
        W: Into<String>,
        I: IntoIterator<Item = (W, f64)>,
    {
        let mut values = HashMap::new();
        for (word, value) in pairs {
            values.entry(word.into()).or_insert(value);
        }
        Self { scale, values }
    }

    /// Reads a headed CSV with a `Word` column and the scale's value column.
    ///
    /// Rows whose value does not parse as a number are skipped.
    pub fn from_csv_reader<R: Read>(scale: CorpusScale, reader: R) -> Result<Self, AppError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AppError::Corpus(format!("missing column '{}'", name)))
        };
        let word_idx = position(WORD_COLUMN)?;
        let value_idx = position(scale.column())?;

        let mut values = HashMap::new();
        let mut skipped = 0usize;
        for record in csv_reader.records() {
            let record = record?;
            let (Some(word), Some(raw)) = (record.get(word_idx), record.get(value_idx)) else {
                skipped += 1;
                continue;
            };
            match raw.trim().parse::<f64>() {
                Ok(value) => {
                    values.entry(word.to_string()).or_insert(value);
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(
                "Skipped {} rows without a numeric '{}' value",
                skipped,
                scale.column()
            );
        }

        Ok(Self { scale, values })
    }

    pub fn from_csv_path(scale: CorpusScale, path: &Path) -> Result<Self, AppError> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_csv_reader(scale, file)?;
        info!(
            "Loaded {} {} entries from {:?}",
            table.len(),
            scale.column(),
            path
        );
        Ok(table)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    pub fn scale(&self) -> CorpusScale {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The optional frequency tables handed to the extractor.
#[derive(Debug, Clone, Default)]
pub struct CorpusSet {
    pub subtlex: Option<CorpusTable>,
    pub zipf: Option<CorpusTable>,
}

impl CorpusSet {
    /// Loads whichever tables have a configured path.
    pub fn load(subtlex_path: Option<&Path>, zipf_path: Option<&Path>) -> Result<Self, AppError> {
        let subtlex = subtlex_path
            .map(|p| CorpusTable::from_csv_path(CorpusScale::Subtlwf, p))
            .transpose()?;
        let zipf = zipf_path
            .map(|p| CorpusTable::from_csv_path(CorpusScale::Zipf, p))
            .transpose()?;
        Ok(Self { subtlex, zipf })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        let table = CorpusTable::from_pairs(CorpusScale::Zipf, [("the", 7.5), ("Cat", 4.0)]);
        assert_eq!(table.lookup("the"), Some(7.5));
        assert_eq!(table.lookup("cat"), None);
        assert_eq!(table.lookup("Cat"), Some(4.0));
        assert_eq!(table.lookup("dog"), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let table = CorpusTable::from_pairs(CorpusScale::Subtlwf, [("run", 1.0), ("run", 9.0)]);
        assert_eq!(table.lookup("run"), Some(1.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_reads_subtlex_columns() {
        let csv = "Word,FREQcount,SUBTLWF\nthe,1501908,29449.18\ncat,1000,19.61\n";
        let table = CorpusTable::from_csv_reader(CorpusScale::Subtlwf, csv.as_bytes()).unwrap();
        assert_eq!(table.scale(), CorpusScale::Subtlwf);
        assert_eq!(table.lookup("the"), Some(29449.18));
        assert_eq!(table.lookup("cat"), Some(19.61));
    }

    #[test]
    fn test_reads_zipf_columns_and_skips_bad_rows() {
        let csv = "Word,Zipf-value\nhouse,5.2\nbroken,n/a\ndog,4.9\n";
        let table = CorpusTable::from_csv_reader(CorpusScale::Zipf, csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("broken"), None);
        assert_eq!(table.lookup("dog"), Some(4.9));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "Word,Frequency\nthe,1\n";
        let result = CorpusTable::from_csv_reader(CorpusScale::Zipf, csv.as_bytes());
        assert!(matches!(result, Err(AppError::Corpus(_))));
    }

    #[test]
    fn test_load_without_paths() {
        let set = CorpusSet::load(None, None).unwrap();
        assert!(set.subtlex.is_none());
        assert!(set.zipf.is_none());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = CorpusSet::load(Some(Path::new("/nonexistent/subtlex.csv")), None);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
