//! Decoded columnar table backed by Arrow record batches

use std::borrow::Cow;
use std::io::Cursor;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Date32Array, Float32Array, Float64Array, Int16Array,
    Int32Array, Int64Array, Int8Array, LargeStringArray, StringArray,
    TimestampMicrosecondArray, TimestampMillisecondArray, TimestampNanosecondArray,
    TimestampSecondArray, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
};
use arrow::datatypes::{DataType, SchemaRef, TimeUnit};
use arrow::ipc::reader::StreamReader;
use arrow::record_batch::RecordBatch;

use crate::error::DecodeError;

use super::CellValue;

/// An immutable, decoded, column-oriented table
///
/// Wraps the record batches read from a single Arrow IPC stream buffer and
/// exposes row/column counts, declared column types, and typed per-cell
/// access. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ColumnarTable {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    /// Cumulative row offsets, one entry per batch boundary
    offsets: Vec<usize>,
    total_rows: usize,
}

impl ColumnarTable {
    /// Decode an Arrow IPC stream buffer into a table
    pub fn decode(buffer: &[u8]) -> Result<Self, DecodeError> {
        let reader = StreamReader::try_new(Cursor::new(buffer), None)?;
        let schema = reader.schema();

        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch?);
        }

        Ok(Self::from_batches(schema, batches))
    }

    /// Build a table from already-decoded batches
    pub fn from_batches(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        let mut offsets = Vec::with_capacity(batches.len() + 1);
        offsets.push(0);
        let mut total = 0;
        for batch in &batches {
            total += batch.num_rows();
            offsets.push(total);
        }

        Self {
            schema,
            batches,
            offsets,
            total_rows: total,
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.total_rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.schema.fields().len()
    }

    /// Schema of the decoded stream
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Declared type of a column, `None` past the schema
    pub fn column_type(&self, column: usize) -> Option<&DataType> {
        self.schema.fields().get(column).map(|f| f.data_type())
    }

    /// Whether the column's declared type is a timestamp
    pub fn is_timestamp(&self, column: usize) -> bool {
        matches!(self.column_type(column), Some(DataType::Timestamp(_, _)))
    }

    /// Decoded scalar at (column, row)
    ///
    /// Returns `None` when the column is past the table's column count, and
    /// `CellValue::Null` when the row is past the table or the slot is null.
    /// Timestamp columns yield the raw stored integer; rendering them as a
    /// date is the view's job.
    pub fn value(&self, column: usize, row: usize) -> Option<CellValue> {
        if column >= self.column_count() {
            return None;
        }

        let Some((batch_idx, local_row)) = self.locate_row(row) else {
            return Some(CellValue::Null);
        };

        let array = self.batches[batch_idx].column(column);
        Some(extract_cell_value(array, local_row))
    }

    /// Locate a global row within the batch list
    fn locate_row(&self, row: usize) -> Option<(usize, usize)> {
        if row >= self.total_rows {
            return None;
        }

        let batch_idx = match self.offsets.binary_search(&row) {
            Ok(idx) => idx.min(self.batches.len() - 1),
            Err(idx) => idx - 1,
        };
        let local_row = row - self.offsets[batch_idx];

        Some((batch_idx, local_row))
    }
}

fn extract_cell_value(array: &ArrayRef, row_idx: usize) -> CellValue {
    if array.is_null(row_idx) {
        return CellValue::Null;
    }

    match array.data_type() {
        DataType::Boolean => {
            let arr = array.as_any().downcast_ref::<BooleanArray>().unwrap();
            CellValue::Bool(arr.value(row_idx))
        }
        DataType::Int8 => {
            let arr = array.as_any().downcast_ref::<Int8Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::Int16 => {
            let arr = array.as_any().downcast_ref::<Int16Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::Int32 => {
            let arr = array.as_any().downcast_ref::<Int32Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::Int64 => {
            let arr = array.as_any().downcast_ref::<Int64Array>().unwrap();
            CellValue::Int(arr.value(row_idx))
        }
        DataType::UInt8 => {
            let arr = array.as_any().downcast_ref::<UInt8Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::UInt16 => {
            let arr = array.as_any().downcast_ref::<UInt16Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::UInt32 => {
            let arr = array.as_any().downcast_ref::<UInt32Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::UInt64 => {
            let arr = array.as_any().downcast_ref::<UInt64Array>().unwrap();
            CellValue::Int(arr.value(row_idx) as i64)
        }
        DataType::Float32 => {
            let arr = array.as_any().downcast_ref::<Float32Array>().unwrap();
            CellValue::Float(arr.value(row_idx) as f64)
        }
        DataType::Float64 => {
            let arr = array.as_any().downcast_ref::<Float64Array>().unwrap();
            CellValue::Float(arr.value(row_idx))
        }
        DataType::Utf8 => {
            let arr = array.as_any().downcast_ref::<StringArray>().unwrap();
            CellValue::Str(Cow::Owned(arr.value(row_idx).to_string()))
        }
        DataType::LargeUtf8 => {
            let arr = array.as_any().downcast_ref::<LargeStringArray>().unwrap();
            CellValue::Str(Cow::Owned(arr.value(row_idx).to_string()))
        }
        DataType::Date32 => {
            let arr = array.as_any().downcast_ref::<Date32Array>().unwrap();
            let days = arr.value(row_idx);
            // Date32 counts days from the Unix epoch; chrono counts from CE
            if let Some(date) = chrono::NaiveDate::from_num_days_from_ce_opt(days + 719163) {
                CellValue::Date(date)
            } else {
                CellValue::Int(days as i64)
            }
        }
        DataType::Timestamp(unit, _) => {
            // Raw stored integer, no unit normalization
            let raw = match unit {
                TimeUnit::Second => {
                    let arr = array.as_any().downcast_ref::<TimestampSecondArray>().unwrap();
                    arr.value(row_idx)
                }
                TimeUnit::Millisecond => {
                    let arr = array
                        .as_any()
                        .downcast_ref::<TimestampMillisecondArray>()
                        .unwrap();
                    arr.value(row_idx)
                }
                TimeUnit::Microsecond => {
                    let arr = array
                        .as_any()
                        .downcast_ref::<TimestampMicrosecondArray>()
                        .unwrap();
                    arr.value(row_idx)
                }
                TimeUnit::Nanosecond => {
                    let arr = array
                        .as_any()
                        .downcast_ref::<TimestampNanosecondArray>()
                        .unwrap();
                    arr.value(row_idx)
                }
            };
            CellValue::Int(raw)
        }
        _ => {
            // Fallback: convert to string
            let formatter = arrow::util::display::ArrayFormatter::try_new(
                array.as_ref(),
                &arrow::util::display::FormatOptions::default(),
            );
            if let Ok(fmt) = formatter {
                CellValue::Str(Cow::Owned(fmt.value(row_idx).to_string()))
            } else {
                CellValue::Null
            }
        }
    }
}
