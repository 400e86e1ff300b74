//! A small fixed-schema table used to collect and print query results.
//!
//! Columns are declared once, at construction. Every row must supply exactly
//! one cell per column; a row that does not is rejected and the table is left
//! untouched.

use crate::error::{FileQueryError, Result};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single table value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::UInt(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&Path> for Cell {
    fn from(value: &Path) -> Self {
        Cell::Text(value.display().to_string())
    }
}

impl From<PathBuf> for Cell {
    fn from(value: PathBuf) -> Self {
        Cell::from(value.as_path())
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value.into())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::UInt(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::UInt(value as u64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table. Fails if `columns` is empty or names a column twice.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(FileQueryError::SchemaMismatch(
                "table must have at least one column".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(FileQueryError::SchemaMismatch(format!(
                    "duplicate column name '{}'",
                    column
                )));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Create a table and fill it with positional rows.
    pub fn from_rows<I, S, R, C>(columns: I, rows: R) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.add_row(row)?;
        }
        Ok(table)
    }

    /// Append a row given as values in column order.
    pub fn add_row<I, C>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let cells: Vec<Cell> = row.into_iter().map(Into::into).collect();
        if cells.len() != self.n_cols() {
            return Err(FileQueryError::SchemaMismatch(format!(
                "the number of row values ({}) must be equal to the number of columns ({})",
                cells.len(),
                self.n_cols()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Append a row given as `(column name, value)` pairs, in any order.
    ///
    /// The set of names must equal the set of columns; otherwise the error
    /// lists every name that is missing or unknown.
    pub fn add_record<I, K, C>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<Cell>,
    {
        let mut cells: Vec<Option<Cell>> = (0..self.n_cols()).map(|_| None).collect();
        let mut differing = BTreeSet::new();
        for (key, value) in record {
            let key = key.into();
            match self.columns.iter().position(|column| *column == key) {
                Some(idx) => cells[idx] = Some(value.into()),
                None => {
                    differing.insert(key);
                }
            }
        }
        for (column, cell) in self.columns.iter().zip(&cells) {
            if cell.is_none() {
                differing.insert(column.clone());
            }
        }
        if !differing.is_empty() {
            return Err(FileQueryError::SchemaMismatch(format!(
                "the row keys must be the column names, but the following keys differed: {:?}",
                differing
            )));
        }
        self.rows.push(cells.into_iter().flatten().collect());
        Ok(())
    }

    pub fn col_name(&self, idx: usize) -> Option<&str> {
        self.columns.get(idx).map(String::as_str)
    }

    pub fn col_names(&self) -> &[String] {
        &self.columns
    }

    pub fn col(&self, idx: usize) -> Option<Vec<&Cell>> {
        if idx >= self.n_cols() {
            return None;
        }
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    pub fn col_by_name(&self, name: &str) -> Option<Vec<&Cell>> {
        self.col(self.col_index(name)?)
    }

    pub fn value(&self, row_idx: usize, col_idx: usize) -> Option<&Cell> {
        self.rows.get(row_idx)?.get(col_idx)
    }

    pub fn value_by_name(&self, row_idx: usize, col_name: &str) -> Option<&Cell> {
        self.value(row_idx, self.col_index(col_name)?)
    }

    pub fn row(&self, idx: usize) -> Option<&[Cell]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// A row as `(column name, value)` pairs in column order.
    pub fn row_record(&self, idx: usize) -> Option<Vec<(&str, &Cell)>> {
        let row = self.rows.get(idx)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect(),
        )
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.n_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn col_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// Every column is left-justified to its widest cell (header included) plus
/// one space. Each line, the last included, ends with `\n`.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                rendered
                    .iter()
                    .map(|row| row[idx].chars().count())
                    .chain(std::iter::once(column.chars().count()))
                    .max()
                    .unwrap_or(0)
                    + 1
            })
            .collect();
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "{:<width$}", column, width = *width)?;
        }
        writeln!(f)?;
        for row in &rendered {
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "{:<width$}", cell, width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct Record<'t> {
    columns: &'t [String],
    cells: &'t [Cell],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Serialized as an array of objects, one per row, keys in column order.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for cells in &self.rows {
            seq.serialize_element(&Record {
                columns: &self.columns,
                cells,
            })?;
        }
        seq.end()
    }
}
