//! Raw demand rows.
//!
//! # CSV format
//!
//! The first row is a header; names are trimmed and lowercased. Any set of
//! columns is accepted, but only `time`, `passengers` and `demand` are
//! interpreted:
//!
//! ```csv
//! Time,Passengers,Notes
//! 07:30,420,morning peak
//! 08:00,180,
//! ```
//!
//! Rows may be shorter than the header; missing and blank cells are absent
//! fields.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use super::DemandError;

/// One row of demand input, keyed by lowercase header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandRecord {
    fields: HashMap<String, String>,
}

impl DemandRecord {
    /// Build a record from `(field, value)` pairs.
    ///
    /// Field names are normalised the same way CSV headers are.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            record.insert(key.as_ref(), value.into());
        }
        record
    }

    fn insert(&mut self, key: &str, value: String) {
        self.fields.insert(key.trim().to_lowercase(), value);
    }

    /// The raw value of a field, or `None` if absent or blank.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The `time` field, unparsed.
    pub fn time(&self) -> Option<&str> {
        self.get("time")
    }

    /// Passenger count from `passengers`, falling back to `demand`.
    ///
    /// A field counts if it starts with a non-negative integer; any
    /// trailing text is ignored, so "150.0" reads as 150. Otherwise the next
    /// candidate is tried.
    pub fn passengers(&self) -> Option<u32> {
        ["passengers", "demand"]
            .iter()
            .find_map(|field| self.get(field).and_then(leading_count))
    }

    /// Number of fields present, blank ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The integer prefix of `value`, after an optional `+`.
fn leading_count(value: &str) -> Option<u32> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Parse demand rows from CSV text.
pub fn parse_demand_csv<R: Read>(reader: R) -> Result<Vec<DemandRecord>, DemandError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = DemandRecord::default();
        for (header, value) in headers.iter().zip(row.iter()) {
            record.insert(header, value.to_string());
        }
        records.push(record);
    }

    Ok(records)
}

/// Load demand rows from a CSV file.
pub fn load_demand_csv(path: &Path) -> Result<Vec<DemandRecord>, DemandError> {
    let file = std::fs::File::open(path)?;
    parse_demand_csv(file)
}
