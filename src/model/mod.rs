//! Columnar table model and cell values

mod table;
mod value;

pub use table::ColumnarTable;
pub use value::CellValue;
