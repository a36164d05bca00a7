//! Loader for the compressed conductor-properties table.
//!
//! The resource is a gzip-compressed CSV keyed by an `id` column, carrying
//! two regression targets (formation energy and bandgap energy) alongside
//! an arbitrary set of numeric feature columns. Nothing else in this crate
//! depends on it; downstream experiment code consumes the table directly.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use ndarray::Array2;

/// Column names of the regression targets, in output order.
pub const TARGET_COLUMNS: [&str; 2] = ["formation_energy_ev_natom", "bandgap_energy_ev"];

/// Name of the row-identifier column.
pub const ID_COLUMN: &str = "id";

/// Errors that can occur while loading or parsing the table.
#[derive(Debug)]
pub enum TableError {
    /// Underlying I/O or decompression failure
    Io(std::io::Error),
    /// A row or cell that does not parse
    Parse { line: usize, reason: String },
    /// The header lacks a required column
    MissingColumn(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "I/O error while reading table: {}", err),
            TableError::Parse { line, reason } => {
                write!(f, "Parse error at line {}: {}", line, reason)
            }
            TableError::MissingColumn(name) => {
                write!(f, "Header is missing required column '{}'", name)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

/// Feature table and two-column target table split out of the CSV.
#[derive(Debug, Clone)]
pub struct ConductorsTable {
    /// Row identifiers, in file order
    pub ids: Vec<String>,
    /// Names of the feature columns, in file order
    pub feature_names: Vec<String>,
    /// Numeric features, one row per sample
    pub features: Array2<f64>,
    /// Targets: column 0 formation energy, column 1 bandgap energy
    pub targets: Array2<f64>,
}

impl ConductorsTable {
    /// Read a gzip-compressed CSV file and split it into features and
    /// targets.
    pub fn load_gz<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let compressed = fs::read(path)?;
        let mut decoder = GzDecoder::new(compressed.as_slice());
        let mut text = String::new();
        decoder.read_to_string(&mut text)?;
        Self::parse_csv(&text)
    }

    /// Parse decompressed CSV text.
    ///
    /// The header names the columns; `id` keys the rows, the two target
    /// columns are pulled out in [`TARGET_COLUMNS`] order, and everything
    /// else becomes a feature column.
    pub fn parse_csv(text: &str) -> Result<Self, TableError> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| TableError::Parse {
                line: 1,
                reason: "file has no header row".to_string(),
            })?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let id_index = find_column(&columns, ID_COLUMN)?;
        let target_indices = [
            find_column(&columns, TARGET_COLUMNS[0])?,
            find_column(&columns, TARGET_COLUMNS[1])?,
        ];

        let mut feature_indices = Vec::new();
        let mut feature_names = Vec::new();
        for (index, name) in columns.iter().enumerate() {
            if index != id_index && !target_indices.contains(&index) {
                feature_indices.push(index);
                feature_names.push(name.to_string());
            }
        }

        let mut ids = Vec::new();
        let mut feature_values = Vec::new();
        let mut target_values = Vec::new();

        for (line_index, line) in lines {
            let line_number = line_index + 1;
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() != columns.len() {
                return Err(TableError::Parse {
                    line: line_number,
                    reason: format!(
                        "expected {} columns, found {}",
                        columns.len(),
                        cells.len()
                    ),
                });
            }

            ids.push(cells[id_index].to_string());
            for &index in &feature_indices {
                feature_values.push(parse_cell(cells[index], columns[index], line_number)?);
            }
            for &index in &target_indices {
                target_values.push(parse_cell(cells[index], columns[index], line_number)?);
            }
        }

        let num_rows = ids.len();
        let features = Array2::from_shape_vec((num_rows, feature_indices.len()), feature_values)
            .map_err(|err| TableError::Parse {
                line: 0,
                reason: err.to_string(),
            })?;
        let targets = Array2::from_shape_vec((num_rows, 2), target_values).map_err(|err| {
            TableError::Parse {
                line: 0,
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            ids,
            feature_names,
            features,
            targets,
        })
    }

    /// Number of rows
    pub fn num_samples(&self) -> usize {
        self.ids.len()
    }

    /// Number of feature columns
    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Names of the target columns, in `targets` column order
    pub fn target_names() -> [&'static str; 2] {
        TARGET_COLUMNS
    }
}

fn find_column(columns: &[&str], name: &str) -> Result<usize, TableError> {
    columns
        .iter()
        .position(|&column| column == name)
        .ok_or_else(|| TableError::MissingColumn(name.to_string()))
}

fn parse_cell(cell: &str, column: &str, line_number: usize) -> Result<f64, TableError> {
    cell.parse::<f64>().map_err(|_| TableError::Parse {
        line: line_number,
        reason: format!("column '{}' has non-numeric value '{}'", column, cell),
    })
}
