//! Activation event value object

use std::collections::HashMap;

/// Data passed to subscribers when the user activates (taps) a toast or
/// one of its buttons.
///
/// Constructed by a backend at activation time, handed once to the
/// fan-out, then discarded. The payload is read-only at the API
/// boundary.
#[derive(Debug, Clone)]
pub struct ToastActivation {
    action_token: String,
    payload: HashMap<String, String>,
}

impl ToastActivation {
    /// Build an event for an activated control.
    ///
    /// An empty `action_token` means the toast body itself was tapped.
    pub fn new(action_token: impl Into<String>, payload: HashMap<String, String>) -> Self {
        Self {
            action_token: action_token.into(),
            payload,
        }
    }

    /// Build an event whose payload is the union of the descriptor
    /// payload and platform-collected user input (quick-reply text and
    /// the like). On key conflict the platform-collected value wins.
    pub fn merged(
        action_token: impl Into<String>,
        descriptor_payload: HashMap<String, String>,
        user_input: HashMap<String, String>,
    ) -> Self {
        let mut payload = descriptor_payload;
        payload.extend(user_input);
        Self::new(action_token, payload)
    }

    /// Which control was activated; empty string for a body tap.
    pub fn action_token(&self) -> &str {
        &self.action_token
    }

    /// Read-only view of the payload.
    pub fn payload(&self) -> &HashMap<String, String> {
        &self.payload
    }

    /// Look up a single payload value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.payload.get(key).map(String::as_str)
    }
}
