//! Application core: data services, derived models and the view models shown by the GUI.

pub mod asset;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod service;
pub mod status;
pub mod table;
pub mod tree;
pub mod view;

pub use context::AppContext;
pub use error::Error;
