//! Poll loop errors

use homework_client::ClientError;
use homework_core::{FormatError, ShapeError};
use thiserror::Error;

/// Any failure of one poll iteration
///
/// Everything here is recoverable: the poller reports it and tries again
/// after the retry period.
#[derive(Debug, Error)]
pub enum PollError {
    /// Review API could not be reached or answered badly
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response does not have the expected structure
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Newest homework record could not be rendered
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl PollError {
    /// Text sent to the recipient for this failure
    pub fn notification(&self) -> String {
        format!("Сбой в работе программы: {self}")
    }
}
