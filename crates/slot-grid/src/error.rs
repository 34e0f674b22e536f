//! Error types for slot-grid operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// An argument fell outside the grid or produced a block that does not fit
    /// inside a single period.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
