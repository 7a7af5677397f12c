use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use thiserror::Error;

use super::model::{Catalog, CourseRecord};

/// Header names every schedule export must carry (exact, case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Subject",
    "Catalog",
    "Section",
    "Component",
    "Session",
    "Units",
    "TotEnrl",
    "CapEnrl",
    "Instructor",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not find {}", path.display())]
    NotFound { path: PathBuf },

    #[error(
        "CSV file missing required columns: {}. Check that the file has the correct header names.",
        missing.join(", ")
    )]
    Schema { missing: Vec<String> },

    #[error("row {row} has {found} fields, expected at least {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("row {row}, column {column}: '{value}' is not a whole number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("reading CSV: {0}")]
    Read(#[from] csv::Error),

    #[error("opening schedule file: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Header → field mapping
// ---------------------------------------------------------------------------

/// Position of each required column in the source, resolved once per load.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    subject: usize,
    catalog: usize,
    section: usize,
    component: usize,
    session: usize,
    units: usize,
    tot_enrl: usize,
    cap_enrl: usize,
    instructor: usize,
    /// Fields a row needs to reach every required column.
    width: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<&str> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
            .collect();
        // Duplicate names resolve to the last column carrying them.
        let position = |name: &str| names.iter().rposition(|h| *h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::Schema { missing });
        }

        let at = |name: &str| position(name).unwrap_or_default();
        let width = REQUIRED_COLUMNS.iter().map(|name| at(name) + 1).max().unwrap_or_default();
        Ok(ColumnIndex {
            subject: at("Subject"),
            catalog: at("Catalog"),
            section: at("Section"),
            component: at("Component"),
            session: at("Session"),
            units: at("Units"),
            tot_enrl: at("TotEnrl"),
            cap_enrl: at("CapEnrl"),
            instructor: at("Instructor"),
            width,
        })
    }

    /// Build a record from one data row. `row` is 1-based, counting the header.
    fn record(&self, row: usize, fields: &StringRecord) -> Result<CourseRecord, LoadError> {
        if fields.len() < self.width {
            return Err(LoadError::ShortRow {
                row,
                found: fields.len(),
                expected: self.width,
            });
        }
        let text = |idx: usize| fields.get(idx).unwrap_or("").trim().to_string();
        let number = |idx: usize, column: &'static str| parse_count(fields.get(idx), row, column);

        Ok(CourseRecord {
            subject: text(self.subject),
            catalog: text(self.catalog),
            section: text(self.section),
            component: text(self.component),
            session: text(self.session),
            units: number(self.units, "Units")?,
            tot_enrl: number(self.tot_enrl, "TotEnrl")?,
            cap_enrl: number(self.cap_enrl, "CapEnrl")?,
            instructor: text(self.instructor),
        })
    }
}

/// Empty cells count as zero; anything else must be a whole number.
fn parse_count(cell: Option<&str>, row: usize, column: &'static str) -> Result<u32, LoadError> {
    let cell = cell.unwrap_or("").trim();
    if cell.is_empty() {
        return Ok(0);
    }
    cell.parse::<u32>().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        value: cell.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a whole CSV source. Nothing is returned unless every row parsed.
pub fn read_records<R: Read>(source: R) -> Result<Vec<CourseRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(source);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let fields = result?;
        records.push(columns.record(i + 2, &fields)?);
    }
    Ok(records)
}

impl Catalog {
    /// Load a schedule export from disk.
    ///
    /// Rows are added on top of whatever is already stored; a row whose
    /// identity key already exists replaces the stored record. On any error
    /// the catalog is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<usize, LoadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io(e),
        })?;
        let count = self.load_reader(file)?;
        if count == 0 {
            warn!("{} has a header but no course rows", path.display());
        } else {
            info!("loaded {count} rows from {}", path.display());
        }
        Ok(count)
    }

    /// Same as [`Catalog::load`] for an already opened source. Returns the
    /// number of data rows read.
    pub fn load_reader<R: Read>(&mut self, source: R) -> Result<usize, LoadError> {
        let records = read_records(source)?;
        let count = records.len();
        for record in records {
            if let Some(previous) = self.insert_or_replace(record) {
                debug!("replaced {}", previous.identity_key());
            }
        }
        Ok(count)
    }
}
