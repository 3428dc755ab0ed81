// File: crates/scamviz-core/src/dataset.rs
// Summary: CSV dataset loading, typed records, and the year filter.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// One reported scam incident. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct ScamRecord {
    pub year: i32,
    /// Coarse scam type.
    pub category_level2: String,
    /// Fine-grained subtype.
    pub category_level3: String,
    /// Reported loss, non-negative.
    pub amount: f64,
    pub report_count: u64,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Load scam records from a CSV file.
///
/// Fails only when the file is unreachable, the CSV framing is broken, or a
/// required column is absent. Rows whose numeric fields do not parse are
/// skipped, never fatal.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<ScamRecord>, DatasetError> {
    let file = File::open(path.as_ref())?;
    read_records(file)
}

/// Parse scam records from any CSV byte stream.
///
/// Required columns (header match is case-insensitive):
/// `year, category_level2, category_level3, amount, no_of_reports`.
pub fn read_records(input: impl io::Read) -> Result<Vec<ScamRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    let column = |name: &'static str| -> Result<usize, DatasetError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DatasetError::MissingColumn(name))
    };

    let i_year = column("year")?;
    let i_level2 = column("category_level2")?;
    let i_level3 = column("category_level3")?;
    let i_amount = column("amount")?;
    let i_reports = column("no_of_reports")?;

    let mut out = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").trim();

        let year = field(i_year).parse::<i32>().ok();
        let amount = parse_amount(field(i_amount));
        let reports = field(i_reports).parse::<u64>().ok();

        match (year, amount, reports) {
            (Some(year), Some(amount), Some(report_count)) => out.push(ScamRecord {
                year,
                category_level2: field(i_level2).to_string(),
                category_level3: field(i_level3).to_string(),
                amount,
                report_count,
            }),
            _ => {
                // Header is line 1, so the first data row is line 2.
                log::debug!("skipping dataset row at line {}: unparsable numeric field", row + 2);
            }
        }
    }
    Ok(out)
}

/// Coerce a monetary cell to a non-negative amount.
/// Accepts a leading `$` and thousands separators.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .strip_prefix('$')
        .unwrap_or(raw)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = cleaned.parse::<f64>().ok()?;
    (value >= 0.0 && value.is_finite()).then_some(value)
}

/// Year selection for the dashboard's drop-down control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(i32),
}

impl YearFilter {
    pub fn matches(&self, record: &ScamRecord) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => record.year == *year,
        }
    }

    /// Fresh filtered copy of `records`; the input is never aliased.
    pub fn apply(&self, records: &[ScamRecord]) -> Vec<ScamRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid year filter `{0}`; expected `all` or a year")]
pub struct YearFilterParseError(String);

impl FromStr for YearFilter {
    type Err = YearFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(YearFilter::All);
        }
        s.parse::<i32>()
            .map(YearFilter::Year)
            .map_err(|_| YearFilterParseError(s.to_string()))
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => write!(f, "all"),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}
