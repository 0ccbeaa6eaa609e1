//! The sales table and its renderings.
//!
//! [`SalesTable`] is the final product of the pipeline: the cleaned header,
//! one record per product and a constant month column. It renders three
//! ways:
//!
//! - CSV ([`SalesTable::write_csv`], [`SalesTable::save_csv`]) with a header
//!   row and no index column
//! - a pandas-style aligned text table via [`std::fmt::Display`], for
//!   printing to a terminal
//! - JSON via [`serde::Serialize`], one object per record keyed by column

use crate::error::ReportError;
use crate::pipeline::reshape::Row;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::io;
use std::path::Path;
use tracing::debug;

/// Header + records, every row with the same number of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesTable {
    columns: Vec<String>,
    records: Vec<Row>,
}

impl SalesTable {
    /// Build a table from reshaped rows (header first) and tag every record
    /// with `month` under the column `month_column`.
    ///
    /// Fails with [`ReportError::FieldCountMismatch`] when a data row does not
    /// have exactly as many fields as the header.
    pub fn from_rows(
        rows: Vec<Row>,
        month: &str,
        month_column: &str,
    ) -> Result<Self, ReportError> {
        let mut rows = rows.into_iter();
        let mut columns = rows.next().ok_or(ReportError::EmptySalesPage)?;

        let mut records = Vec::with_capacity(rows.len());
        for (i, mut fields) in rows.enumerate() {
            if fields.len() != columns.len() {
                return Err(ReportError::FieldCountMismatch {
                    row: i + 1,
                    expected: columns.len(),
                    found: fields.len(),
                    fields,
                });
            }
            fields.push(month.to_string());
            records.push(fields);
        }

        columns.push(month_column.to_string());
        debug!("Built table: {} columns × {} records", columns.len(), records.len());
        Ok(Self { columns, records })
    }

    /// Column names, month column last.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data records in report order.
    pub fn records(&self) -> &[Row] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of the column called `name`.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.records.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Write the table as CSV (header row, no index column).
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for record in &self.records {
            wtr.write_record(record)?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// The CSV rendering as a string.
    pub fn to_csv_string(&self) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write CSV to `path` atomically: a temp file in the same directory is
    /// written first and then renamed over the target. The directory must
    /// already exist.
    pub fn save_csv(&self, path: &Path) -> Result<(), ReportError> {
        let write_failed = |source: io::Error| ReportError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_failed)?;
        self.write_csv(tmp.as_file_mut())?;
        tmp.persist(path).map_err(|e| write_failed(e.error))?;

        debug!("Wrote {} records to {}", self.records.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for SalesTable {
    /// Right-aligned columns with a leading row index, two spaces apart.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            writeln!(f, "Empty table")?;
            writeln!(f, "Columns: [{}]", self.columns.join(", "))?;
            return write!(f, "Index: []");
        }

        let index_width = (self.records.len() - 1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                self.records
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = *width)?;
        }

        for (i, record) in self.records.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<index_width$}", i)?;
            for (value, width) in record.iter().zip(&widths) {
                write!(f, "  {:>width$}", value, width = *width)?;
            }
        }
        Ok(())
    }
}

/// One record viewed as a column → value map.
struct RecordRef<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl Serialize for RecordRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for SalesTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for values in &self.records {
            seq.serialize_element(&RecordRef {
                columns: &self.columns,
                values,
            })?;
        }
        seq.end()
    }
}
