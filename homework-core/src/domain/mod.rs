//! Core domain types
//!
//! Structures shared between the HTTP client (which only moves raw JSON) and
//! the bot (which interprets it).

pub mod homework;
