//! Homework Core
//!
//! Core types and pure transformations for the homework status bot.
//!
//! This crate contains:
//! - Domain types: review statuses and the verdict catalog
//! - Validation: shape checks over the raw API payload
//! - Formatting: the notification text for one homework record
//!
//! Nothing here performs I/O; the client and bot crates do.

pub mod domain;
pub mod error;
pub mod format;
pub mod validation;

pub use domain::homework::{HomeworkStatus, PollResponse};
pub use error::{FormatError, ShapeError};
pub use format::format_status;
pub use validation::validate_response;
