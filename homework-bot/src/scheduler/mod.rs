//! Scheduler layer for the bot
//!
//! This layer drives the poll loop: it owns the poll cursor and the
//! last reported failure, and decides when to notify the recipient.

pub mod poller;

pub use poller::StatusPoller;
