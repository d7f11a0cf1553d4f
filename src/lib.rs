//! CrossToast - Cross-platform desktop toast notifications
//!
//! This crate provides a thin facade over each platform's notification
//! surface: one API to initialize an app identity, show toasts, and
//! receive activation callbacks in a uniform shape.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The notification descriptor, activation event,
//!   identity state, and domain errors
//! - **Application**: The [`Toast`] facade, the [`PlatformNotifier`]
//!   port, and the activation fan-out
//! - **Infrastructure**: Backend implementations (notify-rust,
//!   notify-send, console, no-op) and config loading
//! - **Global**: An optional process-wide instance mirroring the facade
//!   as free functions
//!
//! # Example
//!
//! ```no_run
//! use crosstoast::Toast;
//!
//! # async fn run() -> Result<(), crosstoast::ToastError> {
//! let toast = Toast::with_default_notifier();
//! toast.initialize("com.acme.app", "Acme", None).await?;
//!
//! let subscription = toast.subscribe(|event| {
//!     println!("activated: {}", event.action_token());
//! });
//!
//! toast.success("Backup complete", "All files synced.", None).await?;
//! toast.unsubscribe(subscription);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod global;
pub mod infrastructure;

// Primary API surface
pub use application::dispatch::{ActivationSink, Subscription};
pub use application::facade::Toast;
pub use application::ports::{NotifierError, PlatformNotifier};
pub use domain::{
    AppIdentity, ConfigError, FacadeConfig, Severity, ToastActivation, ToastButton, ToastDuration,
    ToastError, ToastOptions, ToastRequest, ToastScenario,
};
