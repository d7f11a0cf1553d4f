//! Platform notifier port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::application::dispatch::ActivationSink;
use crate::domain::{AppIdentity, ToastRequest};

/// Backend errors
///
/// These never escape the facade: `initialize` and `show` log them and
/// degrade gracefully, because a notification feature failing must not
/// take down the host application.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Platform setup failed: {0}")]
    SetupFailed(String),

    #[error("Failed to show notification: {0}")]
    RenderFailed(String),
}

/// Port for platform notification backends.
///
/// Implemented once per target platform. The facade calls it, never
/// vice versa; the only path back is publishing activation events
/// through the [`ActivationSink`] a backend was handed.
#[async_trait]
pub trait PlatformNotifier: Send + Sync {
    /// One-time platform registration (permission prompts, channel or
    /// shortcut registration). May be a no-op.
    async fn setup(
        &self,
        identity: &AppIdentity,
        activations: ActivationSink,
    ) -> Result<(), NotifierError>;

    /// Display one notification now.
    ///
    /// Fire-and-forget from the facade's perspective: return once the
    /// request is accepted for display. A backend may keep internal
    /// tasks alive afterwards to forward activations through the sink.
    async fn render(
        &self,
        identity: &AppIdentity,
        request: ToastRequest,
        activations: ActivationSink,
    ) -> Result<(), NotifierError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl PlatformNotifier for Box<dyn PlatformNotifier> {
    async fn setup(
        &self,
        identity: &AppIdentity,
        activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        self.as_ref().setup(identity, activations).await
    }

    async fn render(
        &self,
        identity: &AppIdentity,
        request: ToastRequest,
        activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        self.as_ref().render(identity, request, activations).await
    }
}
