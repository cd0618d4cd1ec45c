//! Typed loaders for ratings, error and attribute tables

use std::io::Read;
use std::path::Path;

use catchment_core::{
    is_missing, Attribute, AttributeValues, AttributesTable, Axis, BehaviorLabel, ErrorTable,
    RatingsTable, Table,
};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::raw::RawTable;

/// Default delimiter of ratings and attribute files
pub const DEFAULT_DELIMITER: u8 = b',';

/// Default delimiter of least-squares error files
pub const DEFAULT_ERROR_DELIMITER: u8 = b';';

/// Ratings from CSV text: cells `1`/`simple`, `2`/`complex` or missing
pub fn read_ratings<R: Read>(reader: R, delimiter: u8, row_axis: Axis) -> Result<RatingsTable> {
    ratings_from_raw(RawTable::from_reader(reader, delimiter)?, row_axis)
}

/// Ratings from a CSV file
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_ratings_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    row_axis: Axis,
) -> Result<RatingsTable> {
    ratings_from_raw(RawTable::from_path(&path, delimiter)?, row_axis)
}

/// Error magnitudes from CSV text; unparsable cells are an error
pub fn read_errors<R: Read>(reader: R, delimiter: u8, row_axis: Axis) -> Result<ErrorTable> {
    errors_from_raw(RawTable::from_reader(reader, delimiter)?, row_axis)
}

/// Error magnitudes from a CSV file
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_errors_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    row_axis: Axis,
) -> Result<ErrorTable> {
    errors_from_raw(RawTable::from_path(&path, delimiter)?, row_axis)
}

/// Attributes of catchments or years from CSV text
///
/// Each column becomes continuous when all its present cells are numeric,
/// categorical otherwise.
pub fn read_attributes<R: Read>(reader: R, delimiter: u8, axis: Axis) -> Result<AttributesTable> {
    attributes_from_raw(RawTable::from_reader(reader, delimiter)?, axis)
}

/// Attributes from a CSV file
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_attributes_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    axis: Axis,
) -> Result<AttributesTable> {
    attributes_from_raw(RawTable::from_path(&path, delimiter)?, axis)
}

fn ratings_from_raw(raw: RawTable, row_axis: Axis) -> Result<RatingsTable> {
    let cells = raw.map_cells(|cell| BehaviorLabel::parse_cell(cell).map_err(|e| e.to_string()))?;
    let table = build_table(&raw, row_axis, cells)?;
    debug!(rows = table.n_rows(), columns = table.n_columns(), "loaded ratings");
    Ok(table)
}

fn errors_from_raw(raw: RawTable, row_axis: Axis) -> Result<ErrorTable> {
    let cells = raw.map_cells(parse_error_cell)?;
    let table = build_table(&raw, row_axis, cells)?;
    debug!(rows = table.n_rows(), columns = table.n_columns(), "loaded errors");
    Ok(table)
}

fn attributes_from_raw(raw: RawTable, axis: Axis) -> Result<AttributesTable> {
    let attributes: Vec<Attribute> = raw
        .columns
        .iter()
        .enumerate()
        .map(|(j, name)| {
            let cells: Vec<&str> = raw.rows.iter().map(|(_, row)| row[j].as_str()).collect();
            Attribute {
                name: name.clone(),
                values: AttributeValues::infer(&cells),
            }
        })
        .collect();

    let continuous = attributes.iter().filter(|a| a.values.is_continuous()).count();
    debug!(
        axis = %axis,
        ids = raw.rows.len(),
        continuous,
        categorical = attributes.len() - continuous,
        "loaded attributes"
    );
    Ok(AttributesTable::new(axis, raw.normalized_row_ids(), attributes)?)
}

fn parse_error_cell(cell: &str) -> std::result::Result<Option<f64>, String> {
    if is_missing(cell) {
        return Ok(None);
    }
    let value = cell
        .parse::<f64>()
        .map_err(|e| format!("not a number ({e})"))?;
    if !value.is_finite() {
        return Err("error magnitudes must be finite".into());
    }
    if value < 0.0 {
        return Err("error magnitudes cannot be negative".into());
    }
    Ok(Some(value))
}

fn build_table<T>(raw: &RawTable, row_axis: Axis, cells: Vec<Vec<T>>) -> Result<Table<T>> {
    let rows = raw.normalized_row_ids().into_iter().zip(cells);
    Ok(Table::from_rows(row_axis, raw.normalized_columns(), rows)?)
}
