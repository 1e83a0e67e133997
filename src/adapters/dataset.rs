//! CSV adapter: loads the reference dataset and reduces it to per-feature bounds.
//!
//! Columns are matched by header name, so the file may order them freely and
//! carry extra columns (e.g. a sample `id`). All 30 feature columns and the
//! `diagnosis` label column must be present.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::{BoundsAccumulator, FeatureKey, ReferenceDataset, FEATURE_COUNT};
use crate::ports::ReferenceSource;

/// Name of the label column.
pub const DIAGNOSIS_COLUMN: &str = "diagnosis";

/// Reference dataset loading errors
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open reference dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reference dataset is missing column '{0}'")]
    MissingColumn(String),

    #[error("Invalid value '{value}' in column '{column}' at data row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Reference dataset has no rows")]
    Empty,
}

/// Loads a [`ReferenceDataset`] from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvReferenceLoader {
    path: PathBuf,
}

impl CsvReferenceLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the file and compute bounds.
    ///
    /// # Errors
    /// Returns error if the file is missing, a required column is absent,
    /// a cell fails to parse, or there are no data rows.
    pub fn load(&self) -> Result<ReferenceDataset, DatasetError> {
        let file = File::open(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            "Loaded reference dataset from {:?} ({} samples: {} benign, {} malignant)",
            self.path,
            dataset.samples(),
            dataset.benign(),
            dataset.malignant()
        );

        Ok(dataset)
    }

    /// Parse reference data from any reader.
    ///
    /// # Errors
    /// Same conditions as [`CsvReferenceLoader::load`], minus file access.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<ReferenceDataset, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column_of = |name: &str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };

        let mut feature_columns = [0usize; FEATURE_COUNT];
        for key in FeatureKey::all() {
            feature_columns[key.index()] = column_of(key.column())?;
        }
        let label_column = column_of(DIAGNOSIS_COLUMN)?;

        let mut acc = BoundsAccumulator::default();
        let mut row = [0.0; FEATURE_COUNT];

        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row_number = i + 1;

            for key in FeatureKey::all() {
                let raw = record.get(feature_columns[key.index()]).unwrap_or("");
                row[key.index()] = parse_value(raw).ok_or_else(|| DatasetError::InvalidValue {
                    row: row_number,
                    column: key.column().to_string(),
                    value: raw.to_string(),
                })?;
            }

            let raw_label = record.get(label_column).unwrap_or("");
            let malignant = parse_label(raw_label).ok_or_else(|| DatasetError::InvalidValue {
                row: row_number,
                column: DIAGNOSIS_COLUMN.to_string(),
                value: raw_label.to_string(),
            })?;

            acc.push(&row, malignant);
        }

        tracing::debug!("Accumulated bounds over {} rows", acc.rows());
        acc.finish().ok_or(DatasetError::Empty)
    }
}

impl ReferenceSource for CsvReferenceLoader {
    type Error = DatasetError;

    fn load_reference(&self) -> Result<ReferenceDataset, Self::Error> {
        self.load()
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `true` for malignant. Accepts `M`/`B` and `1`/`0`.
fn parse_label(raw: &str) -> Option<bool> {
    match raw {
        "M" | "m" | "1" | "1.0" => Some(true),
        "B" | "b" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureGroup, Measure, FEATURE_NAMES};

    fn header(extra_first: Option<&str>) -> String {
        let mut cols: Vec<String> = Vec::new();
        if let Some(extra) = extra_first {
            cols.push(extra.to_string());
        }
        cols.push(DIAGNOSIS_COLUMN.to_string());
        cols.extend(FEATURE_NAMES.iter().map(|s| s.to_string()));
        cols.join(",")
    }

    fn row(label: &str, value: f64) -> String {
        let mut cells = vec![label.to_string()];
        cells.extend((0..FEATURE_COUNT).map(|i| format!("{}", value + i as f64)));
        cells.join(",")
    }

    #[test]
    fn test_load_bounds_and_counts() {
        let csv = format!(
            "{}\n{}\n{}\n{}\n",
            header(None),
            row("M", 1.0),
            row("B", 3.0),
            row("0", 2.0)
        );

        let reference = CsvReferenceLoader::from_reader(csv.as_bytes()).expect("Should load");
        assert_eq!(reference.samples(), 3);
        assert_eq!(reference.malignant(), 1);
        assert_eq!(reference.benign(), 2);

        let key = FeatureKey::new(FeatureGroup::Mean, Measure::Texture);
        let b = reference.bounds(key);
        assert!((b.min - 2.0).abs() < 1e-12);
        assert!((b.max - 4.0).abs() < 1e-12);
        assert!((b.mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_extra_columns_and_reordering_ignored() {
        let mut cols: Vec<&str> = FEATURE_NAMES.iter().rev().copied().collect();
        cols.insert(0, "id");
        cols.push(DIAGNOSIS_COLUMN);
        let mut values: Vec<String> = (0..FEATURE_COUNT).rev().map(|i| i.to_string()).collect();
        values.insert(0, "842302".to_string());
        values.push("B".to_string());

        let csv = format!("{}\n{}\n", cols.join(","), values.join(","));
        let reference = CsvReferenceLoader::from_reader(csv.as_bytes()).expect("Should load");

        let last = FeatureKey::from_index(FEATURE_COUNT - 1).expect("valid index");
        assert!((reference.bounds(last).max - 29.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_column() {
        let cols: Vec<&str> = FEATURE_NAMES.iter().skip(1).copied().collect();
        let csv = format!("{},{}\n", DIAGNOSIS_COLUMN, cols.join(","));

        let err = CsvReferenceLoader::from_reader(csv.as_bytes()).expect_err("Should fail");
        assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "radius_mean"));
    }

    #[test]
    fn test_missing_label_column() {
        let csv = format!("{}\n", FEATURE_NAMES.join(","));
        let err = CsvReferenceLoader::from_reader(csv.as_bytes()).expect_err("Should fail");
        assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == DIAGNOSIS_COLUMN));
    }

    #[test]
    fn test_invalid_value() {
        let mut bad = row("B", 1.0);
        bad.push_str("x"); // corrupts the last cell
        let csv = format!("{}\n{}\n{}\n", header(None), row("M", 1.0), bad);

        let err = CsvReferenceLoader::from_reader(csv.as_bytes()).expect_err("Should fail");
        match err {
            DatasetError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "fractal_dimension_worst");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_label() {
        let csv = format!("{}\n{}\n", header(None), row("unknown", 1.0));
        let err = CsvReferenceLoader::from_reader(csv.as_bytes()).expect_err("Should fail");
        assert!(matches!(err, DatasetError::InvalidValue { ref column, .. } if column == DIAGNOSIS_COLUMN));
    }

    #[test]
    fn test_empty_dataset() {
        let csv = format!("{}\n", header(Some("id")));
        let err = CsvReferenceLoader::from_reader(csv.as_bytes()).expect_err("Should fail");
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let loader = CsvReferenceLoader::new("/nonexistent/processed_data.csv");
        assert!(matches!(loader.load(), Err(DatasetError::Io { .. })));
    }
}
