//! Fallback notification backend
//!
//! Best-effort chain for platforms without a native surface: try a
//! notify-send subprocess, and print the console line when that is
//! unavailable. Subprocess failure is never fatal.

use async_trait::async_trait;
use tracing::debug;

use crate::application::dispatch::ActivationSink;
use crate::application::ports::{NotifierError, PlatformNotifier};
use crate::domain::{AppIdentity, ToastRequest};

use super::console::ConsoleNotifier;
use super::notify_send::NotifySendNotifier;

/// notify-send with console fallback
pub struct FallbackNotifier {
    notify_send: NotifySendNotifier,
    console: ConsoleNotifier,
}

impl FallbackNotifier {
    /// Create a fallback backend printing to stderr when notify-send
    /// is unavailable
    pub fn new() -> Self {
        Self::with_console(ConsoleNotifier::new())
    }

    /// Create a fallback backend with a custom console sink
    pub fn with_console(console: ConsoleNotifier) -> Self {
        Self {
            notify_send: NotifySendNotifier::new(),
            console,
        }
    }
}

impl Default for FallbackNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformNotifier for FallbackNotifier {
    async fn setup(
        &self,
        _identity: &AppIdentity,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        Ok(())
    }

    async fn render(
        &self,
        identity: &AppIdentity,
        request: ToastRequest,
        activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        match self
            .notify_send
            .render(identity, request.clone(), activations.clone())
            .await
        {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(error = %e, "notify-send failed; falling back to console output");
                self.console.render(identity, request, activations).await
            }
        }
    }
}
