//! Error types for the cellgraph engine.

use thiserror::Error;

use crate::engine::Address;

/// Errors that can reject a sheet mutation.
///
/// Cell-level evaluation failures (bad expression, division by zero) are not
/// errors at this level: they are contained as the cell's error sentinel and
/// `has_error` flag, and the commit still succeeds.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("circular reference involving {0}")]
    CircularReference(Address),
}

pub type Result<T> = std::result::Result<T, SheetError>;
