use crate::models::{Row, COLUMNS};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the dataset
///
/// All of them are fatal: the dashboard has nothing to serve without data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid record on line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Immutable, ordered collection of match records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Load the table from a CSV file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(file)?;
        tracing::info!("Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load the table from any CSV source
    ///
    /// The header is checked before any record is read, so a file with no
    /// data rows still fails when a required column is absent. Columns not
    /// in [`COLUMNS`] are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let missing: Vec<String> = COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        let mut rows = Vec::new();
        for result in rdr.deserialize::<Row>() {
            let row = result.map_err(|source| {
                let line = source.position().map(|p| p.line()).unwrap_or(0);
                DatasetError::Parse { line, source }
            })?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "applicant_id,job_openings_id,account_id,funnel_id,position_id,\
derived_preferred_locations,job_openings_city,derived_applicant_profile_age,\
derived_preferred_industries,job_openings_industry,job_openings_title,\
derived_dist_btwn_candidate_and_job,similarity_score_actual";

    #[test]
    fn test_load_preserves_order_and_raw_values() {
        let csv = format!(
            "{}\n\
             a1,j1,acc1,f1,p1,Pune,Pune,27,IT,IT,Engineer,3.0,0.91\n\
             a2,j2,acc1,f1,p2,Pune,Pune,031,IT,IT,Engineer,8,0.5\n",
            HEADER
        );

        let table = Table::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].applicant_id, "a1");
        assert_eq!(table.rows()[1].applicant_id, "a2");
        // Raw text is not coerced
        assert_eq!(table.rows()[1].derived_applicant_profile_age, "031");
        assert_eq!(table.rows()[1].distance_km(), 8.0);
        assert_eq!(table.rows()[0].similarity_score_actual, 0.91);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = format!(
            "extra,{}\nx,a1,j1,acc1,f1,p1,Pune,Pune,27,IT,IT,Engineer,3.0,0.91\n",
            HEADER
        );

        let table = Table::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].title(), "Engineer");
    }

    #[test]
    fn test_missing_columns_reported_even_without_rows() {
        let csv = "applicant_id,job_openings_id,job_openings_city\n";

        match Table::from_reader(csv.as_bytes()) {
            Err(DatasetError::MissingColumns(missing)) => {
                assert_eq!(missing.len(), 10);
                assert_eq!(missing[0], "account_id");
                assert!(missing.contains(&"derived_dist_btwn_candidate_and_job".to_string()));
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_distance_is_fatal() {
        let csv = format!(
            "{}\na1,j1,acc1,f1,p1,Pune,Pune,27,IT,IT,Engineer,far,0.91\n",
            HEADER
        );

        match Table::from_reader(csv.as_bytes()) {
            Err(DatasetError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = Table::from_path("/definitely/not/here.csv");
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
