//! Errors reported by data services.

use thiserror::Error;

/// Service error type.
///
/// # Variants
/// - `NotFound` - The entity is absent in local storage. Views render this as an empty state.
/// - `FetchFailed` - Loading data failed, e.g. due to a storage or network issue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Failed to fetch {what}: {reason}")]
    FetchFailed { what: String, reason: String },
}
