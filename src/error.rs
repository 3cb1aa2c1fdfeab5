use thiserror::Error;

/// Domain errors raised by the data layer.
///
/// I/O and format problems while loading a file are reported through
/// `anyhow` in [`crate::data::loader`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The current filter combination matches no records.
    #[error("No data for the selected filter combination. Please adjust the filters.")]
    EmptySelection,

    /// A bucket table whose edges and labels do not line up.
    #[error("invalid buckets: {0}")]
    InvalidBuckets(String),
}
