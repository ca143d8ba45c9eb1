//! CSV reading.
//!
//! The input has a header row with the columns `id, first_name, last_name, age,
//! gender, location, clubs, friends`. `given_name` and `surname` are accepted in
//! place of `first_name` and `last_name`, and any extra columns (such as a
//! leading index column) are ignored. Every listed column is required.
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use social_graph_shared::types::PersonRecord;
use tracing::debug;

use crate::errors::LoaderError;
use crate::literal::{parse_int_list, parse_string_list};

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: i64,
    #[serde(alias = "given_name")]
    first_name: String,
    #[serde(alias = "surname")]
    last_name: String,
    age: i64,
    gender: String,
    location: String,
    clubs: String,
    friends: String,
}

impl PersonRow {
    fn into_record(self, record: usize) -> Result<PersonRecord, LoaderError> {
        let clubs = parse_string_list(&self.clubs).map_err(|source| LoaderError::InvalidList {
            record,
            column: "clubs",
            source,
        })?;
        let friends = parse_int_list(&self.friends).map_err(|source| LoaderError::InvalidList {
            record,
            column: "friends",
            source,
        })?;

        Ok(PersonRecord {
            id: self.id,
            given_name: self.first_name,
            surname: self.last_name,
            age: self.age,
            gender: self.gender,
            location: self.location,
            clubs,
            friends,
        })
    }
}

/// Reads every record from `reader`, stopping at the first malformed one.
///
/// Records are numbered from 1, not counting the header row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PersonRecord>, LoaderError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<PersonRow>().enumerate() {
        records.push(row?.into_record(index + 1)?);
    }

    debug!(records = records.len(), "Read person records");
    Ok(records)
}

/// Reads every record from the CSV file at `path`.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<PersonRecord>, LoaderError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| LoaderError::Open {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    read_records(file)
}
