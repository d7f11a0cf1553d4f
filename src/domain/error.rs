//! Domain error types

use thiserror::Error;

/// Errors raised by the facade for caller mistakes.
///
/// These indicate a usage bug, not a transient condition, and are always
/// surfaced synchronously. Platform-side failures never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToastError {
    #[error("invalid argument: `{field}` must be non-empty")]
    InvalidArgument { field: &'static str },

    #[error("call Toast::initialize(app_id, display_name) before showing notifications")]
    NotInitialized,
}

/// Error when loading a configuration file
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_initialized_message_names_the_fix() {
        let message = ToastError::NotInitialized.to_string();
        assert!(message.contains("Toast::initialize"));
    }

    #[test]
    fn invalid_argument_names_the_field() {
        let err = ToastError::InvalidArgument { field: "app_id" };
        assert!(err.to_string().contains("app_id"));
    }
}
