//! Cross-platform notification backend using notify-rust
//!
//! Works on Windows, macOS, and Linux. On XDG platforms the toast's
//! buttons become notification actions and the chosen action is
//! forwarded through the activation sink.

use async_trait::async_trait;

use crate::application::dispatch::ActivationSink;
use crate::application::ports::{NotifierError, PlatformNotifier};
use crate::domain::{AppIdentity, ToastDuration, ToastRequest};

#[cfg(all(unix, not(target_os = "macos")))]
use crate::domain::{ToastActivation, ToastScenario};

/// Long toasts hold for 25s; short ones use the server default.
const LONG_EXPIRE_MS: u32 = 25_000;

/// Cross-platform backend using notify-rust
pub struct NotifyRustNotifier;

impl NotifyRustNotifier {
    /// Create a new notify-rust backend
    pub fn new() -> Self {
        Self
    }

    fn build(identity: &AppIdentity, request: &ToastRequest) -> notify_rust::Notification {
        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&identity.display_name)
            .summary(&request.title)
            .body(&request.body);

        // The logo override doubles as the per-toast icon; otherwise the
        // registered app icon applies.
        if let Some(icon) = request
            .options
            .app_logo_override_path
            .as_deref()
            .or(identity.icon_path.as_deref())
        {
            notification.icon(icon);
        }

        if request.options.duration == ToastDuration::Long {
            notification.timeout(notify_rust::Timeout::Milliseconds(LONG_EXPIRE_MS));
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if let Some(path) = &request.options.hero_image_path {
                notification.hint(notify_rust::Hint::ImagePath(path.clone()));
            }
            if request.options.silent {
                notification.hint(notify_rust::Hint::SuppressSound(true));
            }
            if matches!(
                request.options.scenario,
                ToastScenario::Alarm | ToastScenario::IncomingCall
            ) {
                notification.urgency(notify_rust::Urgency::Critical);
            }
        }

        notification
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformNotifier for NotifyRustNotifier {
    async fn setup(
        &self,
        _identity: &AppIdentity,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        // notify-rust needs no one-time registration; the desktop
        // session's notification service is resolved per call.
        Ok(())
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    async fn render(
        &self,
        identity: &AppIdentity,
        request: ToastRequest,
        activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        let mut notification = Self::build(identity, &request);

        // Waiting for an action parks a blocking thread until the toast
        // is resolved, so only wire it up when someone is listening.
        let watch = activations.has_subscribers();
        if watch {
            notification.action("default", "default");
            let buttons = [
                (&request.options.primary_button, "primary"),
                (&request.options.secondary_button, "secondary"),
            ];
            for (button, default_token) in buttons {
                if let Some(button) = button {
                    notification.action(button.action_or(default_token), &button.label);
                }
            }
        }

        let payload = request.options.payload.clone();
        let (tx, rx) = tokio::sync::oneshot::channel();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || match notification.show() {
            Ok(handle) => {
                let _ = tx.send(Ok(()));
                if watch {
                    handle.wait_for_action(|action| match action {
                        "__closed" => {}
                        "default" => activations.publish(ToastActivation::new("", payload)),
                        other => activations.publish(ToastActivation::new(other, payload)),
                    });
                }
            }
            Err(e) => {
                let _ = tx.send(Err(NotifierError::RenderFailed(e.to_string())));
            }
        });

        rx.await
            .map_err(|e| NotifierError::RenderFailed(format!("Task join error: {}", e)))?
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn render(
        &self,
        identity: &AppIdentity,
        request: ToastRequest,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        let notification = Self::build(identity, &request);

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotifierError::RenderFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotifierError::RenderFailed(format!("Task join error: {}", e)))?
    }
}
