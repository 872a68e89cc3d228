use std::{fs::File, io::Read, path::Path};

use located_error::prelude::*;
use log::{debug, trace};
use pedigree::{Evidence, Pedigree, PersonRecord};
use serde::Deserialize;

mod error;
pub use error::PedigreeReaderError;

/// A single raw line of a pedigree definition file.
#[derive(Debug, Deserialize)]
struct PedigreeRow {
    name  : String,
    mother: Option<String>,
    father: Option<String>,
    #[serde(rename = "trait")]
    trait_evidence: Option<String>,
}

impl PedigreeRow {
    /// Convert this row into a `PersonRecord`. `line` is only used for error reporting.
    fn into_record(self, line: usize) -> Result<PersonRecord, PedigreeReaderError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PedigreeReaderError::EmptyName{line})
        }

        let evidence = match self.trait_evidence.as_deref().map(str::trim) {
            None | Some("") => Evidence::Unknown,
            Some("1")       => Evidence::KnownTrue,
            Some("0")       => Evidence::KnownFalse,
            Some(other)     => return Err(PedigreeReaderError::InvalidTrait{
                line, name: name.to_string(), value: other.to_string()
            }),
        };

        let parent = |parent: &Option<String>| parent.as_deref().map(str::trim).filter(|p| !p.is_empty()).map(str::to_string);
        Ok(PersonRecord { name: name.to_string(), mother: parent(&self.mother), father: parent(&self.father), trait_evidence: evidence })
    }
}

/// Pedigree definition file reader.
/// ### File characteristics:
/// - Comma-separated fields, with a mandatory header line.
/// - Columns: `name`, `mother`, `father`, `trait`
/// - `mother` and `father` are either both empty (founder) or both filled.
/// - `trait` is either `1` (known to express the trait), `0` (known not to), or empty (unknown).
/// ### Fields:
/// - `records`: raw, unresolved records, in file order.
#[derive(Debug, Clone, Default)]
pub struct PedigreeReader {
    records: Vec<PersonRecord>,
}

impl PedigreeReader {
    /// Read a pedigree definition file.
    ///
    /// # Errors
    /// - if `path` cannot be opened.
    /// - if any line of the file is malformed. see `PedigreeReader::from_reader()`
    pub fn from_path(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While parsing pedigree definition file '{}'", path.display());
        let file = File::open(path).map_err(PedigreeReaderError::Open).with_loc(loc_msg)?;
        let reader = Self::from_reader(file).with_loc(loc_msg)?;
        debug!("Parsed {} individuals from '{}'", reader.len(), path.display());
        Ok(reader)
    }

    /// Parse a pedigree definition from any source.
    ///
    /// # Errors
    /// - `Csv`          if a line holds a missing column, or the header is invalid.
    /// - `InvalidTrait` if a trait field is not `1`, `0`, or empty.
    /// - `EmptyName`    if an individual is not named.
    pub fn from_reader<R: Read>(source: R) -> Result<Self, PedigreeReaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<PedigreeRow>().enumerate() {
            let record = row?.into_record(i + 2)?; // header is line 1.
            trace!("{record:?}");
            records.push(record);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve the parsed records into a validated `Pedigree`.
    ///
    /// # Errors
    /// - if the records do not describe a valid pedigree. see `pedigree::PedigreeError`
    pub fn into_pedigree(self) -> Result<Pedigree> {
        Pedigree::from_records(self.records).loc("While building pedigree from parsed records")
    }
}
