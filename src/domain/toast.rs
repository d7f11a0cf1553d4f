//! Notification descriptor and option hints

use std::collections::HashMap;

/// Short (default) or Long toast duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

/// Notification scenario hint.
///
/// Backends map this to urgency/priority where the platform has such a
/// concept and ignore it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastScenario {
    #[default]
    Default,
    Alarm,
    Reminder,
    IncomingCall,
}

/// One action button on a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastButton {
    /// Button label shown to the user
    pub label: String,
    /// Token returned in the activation event when this button is pressed
    pub action: Option<String>,
}

impl ToastButton {
    /// Create a button with a label and no explicit action token
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    /// Set the action token returned on activation
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// The action token, falling back to a positional default
    /// ("primary"/"secondary") when none was given.
    pub fn action_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.action.as_deref().unwrap_or(default)
    }
}

/// Options for customizing toast appearance and behavior.
///
/// Every field is a hint: a backend ignores what its platform cannot
/// express, never erroring on an unsupported option.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    /// Path or URI of a hero image; interpretation is a backend concern.
    pub hero_image_path: Option<String>,
    /// App logo override image (round-cropped where supported).
    pub app_logo_override_path: Option<String>,
    /// Play no sound.
    pub silent: bool,
    /// Display duration hint.
    pub duration: ToastDuration,
    /// Scenario hint.
    pub scenario: ToastScenario,
    /// Optional primary button.
    pub primary_button: Option<ToastButton>,
    /// Optional secondary button.
    pub secondary_button: Option<ToastButton>,
    /// Opaque key/value pairs echoed back verbatim on activation.
    pub payload: HashMap<String, String>,
}

/// One notification, ready to render.
///
/// Built fresh per `show` call and handed to the backend by value; the
/// facade keeps no cross-call identity or tracking.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    pub title: String,
    pub body: String,
    pub options: ToastOptions,
}

impl ToastRequest {
    pub fn new(title: &str, body: &str, options: ToastOptions) -> Self {
        Self {
            title: title.to_owned(),
            body: body.to_owned(),
            options,
        }
    }

    /// Whether any button is attached.
    pub fn has_buttons(&self) -> bool {
        self.options.primary_button.is_some() || self.options.secondary_button.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_short_quiet_toast() {
        let options = ToastOptions::default();
        assert_eq!(options.duration, ToastDuration::Short);
        assert_eq!(options.scenario, ToastScenario::Default);
        assert!(!options.silent);
        assert!(options.payload.is_empty());
    }

    #[test]
    fn button_action_falls_back_to_positional_default() {
        let plain = ToastButton::new("Later");
        assert_eq!(plain.action_or("secondary"), "secondary");

        let explicit = ToastButton::new("Deploy now").with_action("deploy");
        assert_eq!(explicit.action_or("primary"), "deploy");
    }

    #[test]
    fn request_reports_buttons() {
        let mut options = ToastOptions::default();
        assert!(!ToastRequest::new("t", "b", options.clone()).has_buttons());

        options.secondary_button = Some(ToastButton::new("Later"));
        assert!(ToastRequest::new("t", "b", options).has_buttons());
    }
}
