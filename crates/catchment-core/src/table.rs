//! Labelled two-dimensional tables
//!
//! A [`Table`] holds one cell per (row identifier, column identifier) pair in
//! row-major order and remembers which [`Axis`] its rows run along, so that
//! callers can ask for "one lane per catchment" without caring about the
//! orientation of the file it was read from.

use std::collections::HashSet;

use crate::{Axis, Error, Result};

/// Labelled table of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    row_axis: Axis,
    row_ids: Vec<String>,
    column_ids: Vec<String>,
    cells: Vec<T>,
}

/// All cells belonging to one identifier of an axis
#[derive(Debug, Clone)]
pub struct Lane<'a, T> {
    /// Identifier of the row or column
    pub id: &'a str,
    /// Cells in table order
    pub cells: Vec<&'a T>,
}

impl<T> Table<T> {
    /// Create a table from row-major cells
    pub fn new(
        row_axis: Axis,
        row_ids: Vec<String>,
        column_ids: Vec<String>,
        cells: Vec<T>,
    ) -> Result<Self> {
        let expected = row_ids.len() * column_ids.len();
        if cells.len() != expected {
            return Err(Error::size_mismatch(expected, cells.len(), "table cells"));
        }
        check_unique(&row_ids, "row identifiers")?;
        check_unique(&column_ids, "column identifiers")?;

        Ok(Self {
            row_axis,
            row_ids,
            column_ids,
            cells,
        })
    }

    /// Create a table from `(row id, row cells)` pairs
    pub fn from_rows<I>(row_axis: Axis, column_ids: Vec<String>, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<T>)>,
    {
        let mut row_ids = Vec::new();
        let mut cells = Vec::new();
        for (id, row) in rows {
            if row.len() != column_ids.len() {
                return Err(Error::size_mismatch(
                    column_ids.len(),
                    row.len(),
                    &format!("row {id}"),
                ));
            }
            row_ids.push(id);
            cells.extend(row);
        }
        Self::new(row_axis, row_ids, column_ids, cells)
    }

    /// Axis the rows run along
    pub fn row_axis(&self) -> Axis {
        self.row_axis
    }

    /// Axis the columns run along
    pub fn column_axis(&self) -> Axis {
        self.row_axis.other()
    }

    pub fn n_rows(&self) -> usize {
        self.row_ids.len()
    }

    pub fn n_columns(&self) -> usize {
        self.column_ids.len()
    }

    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    pub fn column_ids(&self) -> &[String] {
        &self.column_ids
    }

    /// Identifiers of the given axis
    pub fn ids_for(&self, axis: Axis) -> &[String] {
        if axis == self.row_axis {
            &self.row_ids
        } else {
            &self.column_ids
        }
    }

    /// Cell at (row, column)
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.n_rows() || column >= self.n_columns() {
            return None;
        }
        self.cells.get(row * self.n_columns() + column)
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[T] {
        let width = self.n_columns();
        &self.cells[row * width..(row + 1) * width]
    }

    /// Cells of one column
    pub fn column(&self, column: usize) -> impl Iterator<Item = &T> + '_ {
        let width = self.n_columns();
        self.cells.iter().skip(column).step_by(width.max(1))
    }

    /// One lane per row
    pub fn row_lanes(&self) -> Vec<Lane<'_, T>> {
        self.row_ids
            .iter()
            .enumerate()
            .map(|(i, id)| Lane {
                id: id.as_str(),
                cells: self.row(i).iter().collect(),
            })
            .collect()
    }

    /// One lane per column
    pub fn column_lanes(&self) -> Vec<Lane<'_, T>> {
        self.column_ids
            .iter()
            .enumerate()
            .map(|(j, id)| Lane {
                id: id.as_str(),
                cells: self.column(j).collect(),
            })
            .collect()
    }

    /// One lane per identifier of `axis`
    pub fn lanes(&self, axis: Axis) -> Vec<Lane<'_, T>> {
        if axis == self.row_axis {
            self.row_lanes()
        } else {
            self.column_lanes()
        }
    }
}

impl<T: Clone> Table<T> {
    /// Swap rows and columns
    pub fn transpose(&self) -> Table<T> {
        let mut cells = Vec::with_capacity(self.cells.len());
        for j in 0..self.n_columns() {
            cells.extend(self.column(j).cloned());
        }
        Table {
            row_axis: self.column_axis(),
            row_ids: self.column_ids.clone(),
            column_ids: self.row_ids.clone(),
            cells,
        }
    }
}

fn check_unique(ids: &[String], context: &str) -> Result<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(Error::InvalidInput(format!(
                "duplicate identifier '{id}' in {context}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Table<i32> {
        Table::new(
            Axis::Year,
            ids(&["1990", "1991"]),
            ids(&["a", "b", "c"]),
            vec![1, 2, 3, 4, 5, 6],
        )
        .unwrap()
    }

    #[test]
    fn test_shape_and_access() {
        let table = sample();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.get(1, 2), Some(&6));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.row(0), &[1, 2, 3]);
        assert_eq!(table.column(1).copied().collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(table.column_axis(), Axis::Catchment);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let result = Table::new(Axis::Year, ids(&["1990"]), ids(&["a", "b"]), vec![1]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Table::new(Axis::Year, ids(&["1990", "1990"]), ids(&["a"]), vec![1, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows_checks_width() {
        let rows = vec![("x".to_string(), vec![1, 2]), ("y".to_string(), vec![3])];
        assert!(Table::from_rows(Axis::Catchment, ids(&["1", "2"]), rows).is_err());
    }

    #[test]
    fn test_transpose() {
        let table = sample();
        let t = table.transpose();
        assert_eq!(t.row_axis(), Axis::Catchment);
        assert_eq!(t.row_ids(), table.column_ids());
        assert_eq!(t.row(0), &[1, 4]);
        assert_eq!(t.row(2), &[3, 6]);
        assert_eq!(t.transpose(), table);
    }

    #[test]
    fn test_lanes_follow_axis() {
        let table = sample();
        let catchments = table.lanes(Axis::Catchment);
        assert_eq!(catchments.len(), 3);
        assert_eq!(catchments[0].id, "a");
        assert_eq!(catchments[0].cells, vec![&1, &4]);

        let years = table.lanes(Axis::Year);
        assert_eq!(years[1].id, "1991");
        assert_eq!(years[1].cells, vec![&4, &5, &6]);
        assert_eq!(table.ids_for(Axis::Catchment), &ids(&["a", "b", "c"])[..]);
    }
}
