use thiserror::Error;

/// Domain failures the preprocessing run can hit before or while mapping
/// rows. Plain I/O problems (missing input file, missing output directory)
/// stay as contextualized `anyhow` errors instead.
#[derive(Debug, Error)]
pub enum PrepError {
    /// A required column is absent from the reviews file.
    #[error("reviews file is missing required column '{column}'")]
    MissingColumn { column: String },

    /// The stop-word list is neither cached locally nor fetchable.
    #[error("stop-word list unavailable: {reason}")]
    ResourceUnavailable { reason: String },
}
