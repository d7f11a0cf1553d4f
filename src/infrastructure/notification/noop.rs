//! No-op notification backend

use async_trait::async_trait;

use crate::application::dispatch::ActivationSink;
use crate::application::ports::{NotifierError, PlatformNotifier};
use crate::domain::{AppIdentity, ToastRequest};

/// No-op backend that discards every notification
///
/// Used when notifications are disabled, and as a stand-in in tests.
pub struct NoopNotifier;

impl NoopNotifier {
    /// Create a new no-op backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformNotifier for NoopNotifier {
    async fn setup(
        &self,
        _identity: &AppIdentity,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        Ok(())
    }

    async fn render(
        &self,
        _identity: &AppIdentity,
        _request: ToastRequest,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        // Do nothing
        Ok(())
    }
}
