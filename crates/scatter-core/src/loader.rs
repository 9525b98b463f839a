// File: crates/scatter-core/src/loader.rs
// Summary: CSV dataset loader; resolves named columns and rejects non-numeric values.

use std::io::Read;
use std::path::Path;

use crate::data::{Dataset, Record};
use crate::error::DataLoadError;

/// Header names for the columns the chart needs. Matching is case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnNames {
    pub name: String,
    pub abbr: String,
    pub poverty: String,
    pub age: String,
    pub obesity: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "state".into(),
            abbr: "abbr".into(),
            poverty: "poverty".into(),
            age: "age".into(),
            obesity: "obesity".into(),
        }
    }
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv_path(path: impl AsRef<Path>, columns: &ColumnNames) -> Result<Dataset, DataLoadError> {
    let path = path.as_ref();
    let rdr = builder()
        .from_path(path)
        .map_err(|e| DataLoadError::open(path, e))?;
    tracing::debug!(path = %path.display(), "opened dataset");
    read_records(rdr, columns)
}

/// Load a dataset from any reader producing CSV text.
pub fn load_csv_reader<R: Read>(reader: R, columns: &ColumnNames) -> Result<Dataset, DataLoadError> {
    read_records(builder().from_reader(reader), columns)
}

fn builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).trim(csv::Trim::Headers);
    b
}

fn read_records<R: Read>(mut rdr: csv::Reader<R>, columns: &ColumnNames) -> Result<Dataset, DataLoadError> {
    let headers = rdr.headers()?.clone();
    tracing::debug!(headers = ?headers.iter().collect::<Vec<_>>(), "dataset headers");

    let idx = |want: &str| headers.iter().position(|h| h == want);
    let require = |want: &str| idx(want).ok_or_else(|| DataLoadError::MissingColumn(want.to_string()));

    let i_name = require(&columns.name)?;
    let i_poverty = require(&columns.poverty)?;
    let i_age = require(&columns.age)?;
    let i_obesity = require(&columns.obesity)?;
    let i_abbr = idx(&columns.abbr);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // header occupies line 1
        let line = rec.position().map(|p| p.line()).unwrap_or(row as u64 + 2);
        let number = |ix: usize, column: &str| -> Result<f64, DataLoadError> {
            let raw = rec.get(ix).unwrap_or("");
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(DataLoadError::invalid_number(line, column, raw)),
            }
        };

        let mut record = Record::new(
            rec.get(i_name).unwrap_or("").trim(),
            number(i_poverty, &columns.poverty)?,
            number(i_age, &columns.age)?,
            number(i_obesity, &columns.obesity)?,
        );
        if let Some(abbr) = i_abbr.and_then(|ix| rec.get(ix)).map(str::trim).filter(|s| !s.is_empty()) {
            record = record.with_abbr(abbr);
        }
        out.push(record);
    }

    if out.is_empty() {
        return Err(DataLoadError::Empty);
    }
    tracing::info!(records = out.len(), "loaded dataset");
    Ok(Dataset::new(out))
}
