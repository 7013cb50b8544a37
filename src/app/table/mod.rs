//! Table engine: canonical rows, categorical filter chips and one sort column.

pub mod column;
pub mod filter;
pub mod model;
pub mod sort;

pub use column::ColumnDef;
pub use filter::FilterChip;
pub use model::{FilterableTable, TableRow, TableSnapshot};
pub use sort::{ColumnSorter, SortDir};
