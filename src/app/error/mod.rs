//! Error types for the EveBuddy application core.
//!
//! Errors are split by domain (configuration, tree construction, services) and aggregated
//! into a single [`Error`] using `thiserror`'s `#[from]` so that `?` converts them
//! automatically. Views never propagate errors to the user as failures of the application;
//! they turn them into a red label via [`Error::humanize`].

pub mod config;
pub mod service;
pub mod tree;

use thiserror::Error;

use crate::{
    app::error::{config::ConfigError, service::ServiceError, tree::TreeError},
    model::IdError,
};

/// Main error type for the EveBuddy application core.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Tree errors (unknown parent node, duplicate node UID)
/// - ID errors (zero IDs rejected by typed identifiers)
/// - Service errors (entity not found, fetching data failed)
/// - External library errors (file I/O, JSON parsing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Error while building a tree of nodes.
    #[error(transparent)]
    TreeError(#[from] TreeError),
    /// Invalid identifier.
    #[error(transparent)]
    IdError(#[from] IdError),
    /// Error reported by a data service.
    #[error(transparent)]
    ServiceError(#[from] ServiceError),
    /// File I/O error, e.g. while reading a data snapshot.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON (de)serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Internal error indicating a bug in EveBuddy's code.
    #[error("Internal error with EveBuddy's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
}

impl Error {
    /// Returns a short message for showing this error in the GUI.
    ///
    /// Internal details like file paths or JSON positions are left to the log.
    pub fn humanize(&self) -> String {
        match self {
            Self::ConfigError(err) => err.to_string(),
            Self::ServiceError(err) => err.to_string(),
            Self::TreeError(_) | Self::IdError(_) | Self::InternalError(_) => {
                "Internal error".to_string()
            }
            Self::IoError(err) => format!("File error: {}", err.kind()),
            Self::JsonError(_) => "Invalid data format".to_string(),
        }
    }

    /// Reports whether this error means an entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ServiceError(ServiceError::NotFound { .. }))
    }
}
