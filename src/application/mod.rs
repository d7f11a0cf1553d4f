//! Application layer - The facade and its port interfaces

pub mod dispatch;
pub mod facade;
pub mod ports;

// Re-export common types
pub use dispatch::{ActivationSink, Subscription};
pub use facade::Toast;
pub use ports::{NotifierError, PlatformNotifier};
