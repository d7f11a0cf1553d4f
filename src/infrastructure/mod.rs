//! Infrastructure layer - Backend implementations
//!
//! Contains concrete implementations of the notifier port, integrating
//! with native notification surfaces, and the config file loader.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::load_config;
pub use notification::{
    create_default_notifier, create_notifier, ConsoleNotifier, FallbackNotifier, NoopNotifier,
    NotifierBackend, NotifierPreference, NotifyRustNotifier, NotifySendNotifier,
};
