//! notify-send notification backend

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::application::dispatch::ActivationSink;
use crate::application::ports::{NotifierError, PlatformNotifier};
use crate::domain::{AppIdentity, ToastActivation, ToastDuration, ToastRequest, ToastScenario};

/// Long toasts hold for 25s; short ones use the server default.
const LONG_EXPIRE_MS: u32 = 25_000;

/// notify-send subprocess backend
///
/// When the request carries buttons and anyone is subscribed, the
/// process is spawned with `--action` flags and its stdout (the chosen
/// action name) is republished as an activation event.
pub struct NotifySendNotifier;

impl NotifySendNotifier {
    /// Create a new notify-send backend
    pub fn new() -> Self {
        Self
    }

    fn spawn_error(e: io::Error) -> NotifierError {
        if e.kind() == io::ErrorKind::NotFound {
            NotifierError::NotifySendNotFound
        } else {
            NotifierError::RenderFailed(e.to_string())
        }
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformNotifier for NotifySendNotifier {
    async fn setup(
        &self,
        _identity: &AppIdentity,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        // No registration step; notify-send resolves the daemon per call.
        Ok(())
    }

    async fn render(
        &self,
        identity: &AppIdentity,
        request: ToastRequest,
        activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        let mut cmd = Command::new("notify-send");
        cmd.arg("--app-name").arg(&identity.display_name);

        if let Some(icon) = &identity.icon_path {
            cmd.arg("--icon").arg(icon);
        }

        if request.options.duration == ToastDuration::Long {
            cmd.arg("--expire-time").arg(LONG_EXPIRE_MS.to_string());
        }

        if matches!(
            request.options.scenario,
            ToastScenario::Alarm | ToastScenario::IncomingCall
        ) {
            cmd.arg("--urgency").arg("critical");
        }

        let watch = request.has_buttons() && activations.has_subscribers();
        if watch {
            let buttons = [
                (&request.options.primary_button, "primary"),
                (&request.options.secondary_button, "secondary"),
            ];
            for (button, default_token) in buttons {
                if let Some(button) = button {
                    cmd.arg(format!(
                        "--action={}={}",
                        button.action_or(default_token),
                        button.label
                    ));
                }
            }
        }

        cmd.arg(&request.title)
            .arg(&request.body)
            .stdin(Stdio::null())
            .stderr(Stdio::null());

        if watch {
            // notify-send blocks until the notification is resolved and
            // prints the chosen action name, so read it off-path.
            let mut child = cmd
                .stdout(Stdio::piped())
                .spawn()
                .map_err(Self::spawn_error)?;
            let stdout = child.stdout.take();
            let payload = request.options.payload.clone();

            tokio::spawn(async move {
                if let Some(mut stdout) = stdout {
                    let mut chosen = String::new();
                    if stdout.read_to_string(&mut chosen).await.is_ok() {
                        let token = chosen.trim();
                        if !token.is_empty() {
                            activations.publish(ToastActivation::new(token, payload));
                        }
                    }
                }
                let _ = child.wait().await;
            });

            return Ok(());
        }

        let status = cmd
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(Self::spawn_error)?;

        if !status.success() {
            return Err(NotifierError::RenderFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
