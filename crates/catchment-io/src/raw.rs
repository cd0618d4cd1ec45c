//! Untyped view of a CSV file with an index column

use std::fs::File;
use std::io::Read;
use std::path::Path;

use catchment_core::normalize_identifier;
use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};

/// Text cells of a CSV file whose first column holds row identifiers
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Header cells after the index column
    pub columns: Vec<String>,
    /// Row identifier and the remaining cells of each record
    pub rows: Vec<(String, Vec<String>)>,
}

impl RawTable {
    /// Parse from any reader; the first record is the header
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv.headers()?.clone();
        if headers.len() < 2 {
            return Err(Error::EmptyTable(format!(
                "expected an index column and at least one data column, found {} column(s)",
                headers.len()
            )));
        }
        let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in csv.records() {
            let record = record?;
            let mut cells = record.iter();
            let id = cells.next().unwrap_or_default().to_string();
            rows.push((id, cells.map(str::to_string).collect()));
        }
        if rows.is_empty() {
            return Err(Error::EmptyTable("no data rows".into()));
        }

        Ok(Self { columns, rows })
    }

    /// Parse a file
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, delimiter)
    }

    /// Row identifiers in canonical form
    pub fn normalized_row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|(id, _)| normalize_identifier(id)).collect()
    }

    /// Column identifiers in canonical form
    pub fn normalized_columns(&self) -> Vec<String> {
        self.columns.iter().map(|c| normalize_identifier(c)).collect()
    }

    /// Convert every cell, reporting the first failure with its position
    pub fn map_cells<T, F>(&self, mut parse: F) -> Result<Vec<Vec<T>>>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        self.rows
            .iter()
            .map(|(id, cells)| {
                cells
                    .iter()
                    .zip(&self.columns)
                    .map(|(value, column)| {
                        parse(value).map_err(|reason| Error::InvalidCell {
                            row: id.clone(),
                            column: column.clone(),
                            value: value.clone(),
                            reason,
                        })
                    })
                    .collect()
            })
            .collect()
    }
}
