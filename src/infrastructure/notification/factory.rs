//! Notification backend factory with automatic detection

use std::fmt;
use std::process::Stdio;
use std::str::FromStr;

use tokio::process::Command;

use crate::application::ports::{NotifierError, PlatformNotifier};

use super::console::ConsoleNotifier;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use super::fallback::FallbackNotifier;
use super::noop::NoopNotifier;
use super::notify_rust::NotifyRustNotifier;
use super::notify_send::NotifySendNotifier;

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierBackend {
    /// Cross-platform notify-rust library
    NotifyRust,
    /// notify-send subprocess
    NotifySend,
    /// Console diagnostic line
    Console,
    /// Discard everything
    Noop,
}

impl fmt::Display for NotifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierBackend::NotifyRust => write!(f, "notify-rust"),
            NotifierBackend::NotifySend => write!(f, "notify-send"),
            NotifierBackend::Console => write!(f, "console"),
            NotifierBackend::Noop => write!(f, "noop"),
        }
    }
}

/// User preference for backend selection.
///
/// `Auto` (the default) picks the best backend for the current
/// platform; the rest force a specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierPreference {
    /// Auto-detect the best available backend
    #[default]
    Auto,
    /// Use the notify-rust library
    NotifyRust,
    /// Use a notify-send subprocess
    NotifySend,
    /// Print a console line per toast
    Console,
    /// Disable notifications entirely
    Noop,
}

impl fmt::Display for NotifierPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierPreference::Auto => write!(f, "auto"),
            NotifierPreference::NotifyRust => write!(f, "notify-rust"),
            NotifierPreference::NotifySend => write!(f, "notify-send"),
            NotifierPreference::Console => write!(f, "console"),
            NotifierPreference::Noop => write!(f, "noop"),
        }
    }
}

/// Error type for parsing a backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNotifierPreferenceError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseNotifierPreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid notifier '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseNotifierPreferenceError {}

impl FromStr for NotifierPreference {
    type Err = ParseNotifierPreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(NotifierPreference::Auto),
            "notify-rust" => Ok(NotifierPreference::NotifyRust),
            "notify-send" => Ok(NotifierPreference::NotifySend),
            "console" => Ok(NotifierPreference::Console),
            "noop" => Ok(NotifierPreference::Noop),
            _ => Err(ParseNotifierPreferenceError {
                value: s.to_string(),
                valid_options: "auto, notify-rust, notify-send, console, noop",
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Detect the best available backend
///
/// On Windows/macOS/Linux: notify-rust.
/// Elsewhere: notify-send if present, console otherwise.
pub async fn detect_notifier_backend() -> NotifierBackend {
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    {
        NotifierBackend::NotifyRust
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        if is_tool_available("notify-send").await {
            NotifierBackend::NotifySend
        } else {
            NotifierBackend::Console
        }
    }
}

/// Create a notification backend using the specified preference.
///
/// Returns the backend and which kind was selected, or an error when a
/// forced backend is unavailable.
pub async fn create_notifier(
    preference: NotifierPreference,
) -> Result<(Box<dyn PlatformNotifier>, NotifierBackend), NotifierError> {
    match preference {
        NotifierPreference::Auto => {
            let backend = detect_notifier_backend().await;
            Ok((create_specific(backend), backend))
        }
        NotifierPreference::NotifyRust => Ok((
            Box::new(NotifyRustNotifier::new()) as Box<dyn PlatformNotifier>,
            NotifierBackend::NotifyRust,
        )),
        NotifierPreference::NotifySend => {
            if is_tool_available("notify-send").await {
                Ok((
                    Box::new(NotifySendNotifier::new()) as Box<dyn PlatformNotifier>,
                    NotifierBackend::NotifySend,
                ))
            } else {
                Err(NotifierError::NotifySendNotFound)
            }
        }
        NotifierPreference::Console => Ok((
            Box::new(ConsoleNotifier::new()) as Box<dyn PlatformNotifier>,
            NotifierBackend::Console,
        )),
        NotifierPreference::Noop => Ok((
            Box::new(NoopNotifier::new()) as Box<dyn PlatformNotifier>,
            NotifierBackend::Noop,
        )),
    }
}

/// Create a specific backend
fn create_specific(backend: NotifierBackend) -> Box<dyn PlatformNotifier> {
    match backend {
        NotifierBackend::NotifyRust => Box::new(NotifyRustNotifier::new()),
        NotifierBackend::NotifySend => Box::new(NotifySendNotifier::new()),
        NotifierBackend::Console => Box::new(ConsoleNotifier::new()),
        NotifierBackend::Noop => Box::new(NoopNotifier::new()),
    }
}

/// Create the default backend for the current platform without probing
/// the environment.
///
/// notify-rust where it has native support; the notify-send/console
/// fallback chain elsewhere.
pub fn create_default_notifier() -> Box<dyn PlatformNotifier> {
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    {
        Box::new(NotifyRustNotifier::new())
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        Box::new(FallbackNotifier::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display() {
        assert_eq!(NotifierBackend::NotifyRust.to_string(), "notify-rust");
        assert_eq!(NotifierBackend::NotifySend.to_string(), "notify-send");
        assert_eq!(NotifierBackend::Console.to_string(), "console");
        assert_eq!(NotifierBackend::Noop.to_string(), "noop");
    }

    #[test]
    fn preference_display() {
        assert_eq!(NotifierPreference::Auto.to_string(), "auto");
        assert_eq!(NotifierPreference::NotifyRust.to_string(), "notify-rust");
        assert_eq!(NotifierPreference::NotifySend.to_string(), "notify-send");
        assert_eq!(NotifierPreference::Console.to_string(), "console");
        assert_eq!(NotifierPreference::Noop.to_string(), "noop");
    }

    #[test]
    fn preference_from_str() {
        assert_eq!(
            "auto".parse::<NotifierPreference>().unwrap(),
            NotifierPreference::Auto
        );
        assert_eq!(
            "NOTIFY-RUST".parse::<NotifierPreference>().unwrap(),
            NotifierPreference::NotifyRust
        );
        assert_eq!(
            "console".parse::<NotifierPreference>().unwrap(),
            NotifierPreference::Console
        );
        assert_eq!(
            "noop".parse::<NotifierPreference>().unwrap(),
            NotifierPreference::Noop
        );
    }

    #[test]
    fn preference_from_str_invalid() {
        let err = "growl".parse::<NotifierPreference>().unwrap_err();
        assert_eq!(err.value, "growl");
        assert!(err.valid_options.contains("auto"));
    }

    #[test]
    fn preference_default_is_auto() {
        assert_eq!(NotifierPreference::default(), NotifierPreference::Auto);
    }

    #[tokio::test]
    async fn forced_console_backend_is_created() {
        let (_notifier, backend) = create_notifier(NotifierPreference::Console).await.unwrap();
        assert_eq!(backend, NotifierBackend::Console);
    }
}
