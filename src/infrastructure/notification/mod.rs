//! Notification backend module
//!
//! Provides cross-platform notification support using notify-rust
//! (primary) with notify-send, console, and no-op backends for
//! platforms and setups without a native surface.

mod console;
mod factory;
mod fallback;
mod noop;
mod notify_rust;
mod notify_send;

pub use console::ConsoleNotifier;
pub use factory::{
    create_default_notifier, create_notifier, detect_notifier_backend, NotifierBackend,
    NotifierPreference, ParseNotifierPreferenceError,
};
pub use fallback::FallbackNotifier;
pub use noop::NoopNotifier;
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;
