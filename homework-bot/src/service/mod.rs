//! Service layer
//!
//! Services hold the bot's business rules on top of the repositories.
//! They are trait-based so the scheduler can be tested with fakes.

mod notifier;

// Re-export traits
pub use notifier::NotificationService;

// Re-export implementations
pub use notifier::ChatNotifier;
