//! Grid view adapter over three decoded columnar tables
//!
//! The grid a renderer walks is the data table framed by header rows (from
//! the column-index table) and header columns (from the row-index table).
//! `get_cell` classifies a coordinate into one of four regions and returns
//! a descriptor carrying class labels, content, and an optional id.

use crate::error::DecodeError;
use crate::model::{CellValue, ColumnarTable};
use crate::payload::{StylerPayload, TablePayload};
use crate::style::Styler;

/// Region of the grid a coordinate falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Top-left intersection of the header rows and header columns
    Blank,
    /// Label drawn from the column-index table
    ColumnHeader,
    /// Label drawn from the row-index table
    IndexHeader,
    /// Value drawn from the data table (or the styler's display values)
    Data,
}

/// Descriptor produced by a single coordinate query
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    /// Ordered class labels for the rendered element
    pub classes: Vec<String>,
    pub content: CellValue,
    /// Uuid-scoped element id; index-header and data cells only
    pub id: Option<String>,
}

impl Cell {
    /// Space-joined class attribute value
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// Adapter from three decoded columnar tables to a renderable grid
///
/// Stateless after construction; all queries are pure reads and safe to
/// issue from any number of callers.
#[derive(Debug, Clone)]
pub struct TableView {
    data: ColumnarTable,
    index: ColumnarTable,
    columns: ColumnarTable,
    styler: Option<Styler>,
}

impl TableView {
    /// Decode the three IPC buffers and the optional styler bundle
    pub fn new(
        data: &[u8],
        index: &[u8],
        columns: &[u8],
        styler: Option<&StylerPayload>,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            data: ColumnarTable::decode(data)?,
            index: ColumnarTable::decode(index)?,
            columns: ColumnarTable::decode(columns)?,
            styler: styler.map(Styler::from_payload).transpose()?,
        })
    }

    /// Build a view from a whole wire payload
    pub fn from_payload(payload: &TablePayload) -> Result<Self, DecodeError> {
        Self::new(
            &payload.data,
            &payload.index,
            &payload.columns,
            payload.styler.as_ref(),
        )
    }

    /// Grid row count: index rows plus one header row per column level
    ///
    /// The column-index table is transposed on the wire (one row per data
    /// column, one column per header level), so this reads its column count.
    pub fn rows(&self) -> usize {
        self.index.row_count() + self.columns.column_count()
    }

    /// Grid column count: index levels plus one column per data column
    pub fn columns(&self) -> usize {
        self.index.column_count() + self.columns.row_count()
    }

    /// Rows in the data region
    pub fn data_rows(&self) -> usize {
        self.data.row_count()
    }

    /// Columns in the data region
    pub fn data_columns(&self) -> usize {
        self.data.column_count()
    }

    /// Header rows above the data region
    pub fn header_rows(&self) -> usize {
        self.rows() - self.data_rows()
    }

    /// Header columns left of the data region
    pub fn header_columns(&self) -> usize {
        self.columns() - self.data_columns()
    }

    /// Styler uuid, `None` without style metadata
    pub fn uuid(&self) -> Option<&str> {
        self.styler.as_ref().map(Styler::uuid)
    }

    /// Table caption, `None` without style metadata
    pub fn caption(&self) -> Option<&str> {
        self.styler.as_ref().and_then(Styler::caption)
    }

    /// Free-form style text, `None` without style metadata
    pub fn styles(&self) -> Option<&str> {
        self.styler.as_ref().and_then(Styler::styles)
    }

    /// Raw handle to the data table
    pub fn data_table(&self) -> &ColumnarTable {
        &self.data
    }

    /// Raw handle to the row-index table
    pub fn index_table(&self) -> &ColumnarTable {
        &self.index
    }

    /// Raw handle to the column-index table
    pub fn columns_table(&self) -> &ColumnarTable {
        &self.columns
    }

    /// Describe the cell at a grid coordinate
    ///
    /// Coordinates are expected to lie inside `rows() x columns()`; callers
    /// own range checking. Exactly one of the four regions matches, in the
    /// precedence blank, column-header, index-header, data.
    pub fn get_cell(&self, row_index: usize, column_index: usize) -> Cell {
        let header_rows = self.header_rows();
        let header_columns = self.header_columns();

        if row_index < header_rows && column_index < header_columns {
            let mut classes = vec!["blank".to_string()];
            if column_index > 0 {
                classes.push(format!("level{row_index}"));
            }

            Cell {
                kind: CellKind::Blank,
                classes,
                content: CellValue::from(""),
                id: None,
            }
        } else if row_index < header_rows {
            let data_column_index = column_index - header_columns;

            Cell {
                kind: CellKind::ColumnHeader,
                classes: vec![
                    "col_heading".to_string(),
                    format!("level{row_index}"),
                    format!("col{data_column_index}"),
                ],
                // Transposed: grid header row = column level of the table
                content: self.content(&self.columns, data_column_index, row_index),
                id: None,
            }
        } else if column_index < header_columns {
            let data_row_index = row_index - header_rows;

            Cell {
                kind: CellKind::IndexHeader,
                classes: vec![
                    "row_heading".to_string(),
                    format!("level{column_index}"),
                    format!("row{data_row_index}"),
                ],
                content: self.content(&self.index, data_row_index, column_index),
                id: Some(format!(
                    "T_{}level{column_index}_row{data_row_index}",
                    self.uuid().unwrap_or("")
                )),
            }
        } else {
            let data_row_index = row_index - header_rows;
            let data_column_index = column_index - header_columns;

            let content = match &self.styler {
                Some(styler) => {
                    self.content(styler.display_values(), data_row_index, data_column_index)
                }
                None => self.content(&self.data, data_row_index, data_column_index),
            };

            Cell {
                kind: CellKind::Data,
                classes: vec![
                    "data".to_string(),
                    format!("row{data_row_index}"),
                    format!("col{data_column_index}"),
                ],
                content,
                id: Some(format!(
                    "T_{}row{data_row_index}_col{data_column_index}",
                    self.uuid().unwrap_or("")
                )),
            }
        }
    }

    /// Content lookup with the timestamp rendering rule
    ///
    /// A column index past the table degrades to empty-string content so a
    /// header/data shape mismatch never breaks rendering. Timestamp columns
    /// store an integer nanosecond count; it renders as the date-time at
    /// `nanos / 1_000_000` milliseconds.
    fn content(&self, table: &ColumnarTable, row_index: usize, column_index: usize) -> CellValue {
        let Some(value) = table.value(column_index, row_index) else {
            return CellValue::from("");
        };

        if table.is_timestamp(column_index) {
            if let CellValue::Int(nanos) = value {
                return nanos_to_datetime(nanos);
            }
        }

        value
    }
}

fn nanos_to_datetime(nanos: i64) -> CellValue {
    let millis = nanos / 1_000_000;
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(dt) => CellValue::DateTime(dt.naive_utc()),
        None => CellValue::Int(nanos),
    }
}
