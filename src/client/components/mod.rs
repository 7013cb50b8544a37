pub mod data_table;
pub mod filter_chip;
pub mod location_tree;
pub mod navbar;
pub mod page;
pub mod status_label;

pub use data_table::{DataTable, SortBySelect};
pub use filter_chip::FilterChipSelect;
pub use location_tree::LocationTree;
pub use navbar::Navbar;
pub use page::Page;
pub use status_label::StatusText;
