// File: crates/scatter-core/src/data.rs
// Summary: Record/Dataset model and the horizontal axis field selector.

use std::fmt;

/// Which record attribute drives the horizontal coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisField {
    #[default]
    Poverty,
    Age,
}

impl AxisField {
    pub const ALL: [AxisField; 2] = [AxisField::Poverty, AxisField::Age];

    /// Read this field from a record.
    #[inline]
    pub fn value(self, record: &Record) -> f64 {
        match self {
            AxisField::Poverty => record.poverty_rate,
            AxisField::Age => record.median_age,
        }
    }

    /// Label used inside tooltips.
    pub const fn tooltip_label(self) -> &'static str {
        match self {
            AxisField::Poverty => "Poverty",
            AxisField::Age => "Age",
        }
    }

    /// Suffix appended to the value inside tooltips.
    pub const fn unit_suffix(self) -> &'static str {
        match self {
            AxisField::Poverty => "%",
            AxisField::Age => " years",
        }
    }

    /// Text of the clickable axis label that selects this field.
    pub const fn axis_title(self) -> &'static str {
        match self {
            AxisField::Poverty => "In Poverty (%)",
            AxisField::Age => "Age (Median)",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            AxisField::Poverty => AxisField::Age,
            AxisField::Age => AxisField::Poverty,
        }
    }
}

impl fmt::Display for AxisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AxisField::Poverty => "poverty",
            AxisField::Age => "age",
        })
    }
}

/// One observational unit (a U.S. state).
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    /// Short label drawn inside the mark when present.
    pub abbr: Option<String>,
    pub poverty_rate: f64,
    pub median_age: f64,
    pub obesity_rate: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, poverty_rate: f64, median_age: f64, obesity_rate: f64) -> Self {
        Self {
            name: name.into(),
            abbr: None,
            poverty_rate,
            median_age,
            obesity_rate,
        }
    }

    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }
}

/// Ordered, immutable collection of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Min and max of `value` over all records in one pass; `None` when empty.
    pub fn extent(&self, value: impl Fn(&Record) -> f64) -> Option<(f64, f64)> {
        let mut it = self.records.iter().map(value);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
