pub mod use_view;

pub use use_view::use_view;
