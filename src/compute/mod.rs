//! Host-facing views of arguments and produced values.
pub mod argument;
pub mod batch;
pub mod column;
pub mod value;

pub use argument::Argument;
pub use batch::{resolve_all, ComputedColumn, ResolvedColumn};
pub use column::Column;
pub use value::{CellValue, ValueSource};
