//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the
//! scheduler and services narrow, trait-based interfaces so the poll loop
//! can run against in-memory fakes in tests.

mod chat;
mod homeworks;

// Re-export traits
pub use chat::ChatRepository;
pub use homeworks::HomeworkRepository;

// Re-export implementations
pub use chat::TelegramChatRepository;
pub use homeworks::HttpHomeworkRepository;
