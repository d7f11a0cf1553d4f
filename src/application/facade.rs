//! The toast facade
//!
//! Process-wide entry point for showing notifications. Owns the
//! initialization state, the active backend, and the activation
//! fan-out; callers never touch platform mechanics.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::application::dispatch::{ActivationHub, ActivationSink, Subscription};
use crate::application::ports::PlatformNotifier;
use crate::domain::{
    AppIdentity, Severity, ToastActivation, ToastError, ToastOptions, ToastRequest,
};

/// Cross-platform toast/notification facade.
///
/// Construct one per process (or use [`crate::global`] for a shared
/// instance), call [`initialize`](Self::initialize) once, then `show`
/// away. All methods are safe to call from any thread.
pub struct Toast {
    notifier: Box<dyn PlatformNotifier>,
    identity: Mutex<Option<AppIdentity>>,
    hub: Arc<ActivationHub>,
}

impl Toast {
    /// Create a facade driving the given backend.
    pub fn new(notifier: Box<dyn PlatformNotifier>) -> Self {
        Self {
            notifier,
            identity: Mutex::new(None),
            hub: Arc::new(ActivationHub::new()),
        }
    }

    /// Create a facade with the default backend for this platform.
    pub fn with_default_notifier() -> Self {
        Self::new(crate::infrastructure::notification::create_default_notifier())
    }

    /// Call once during app start to set up platform specific
    /// notification infrastructure.
    ///
    /// Stores the identity, marks the facade initialized, and runs the
    /// backend's one-time setup. A backend setup failure does not fail
    /// initialization; it is logged and the facade degrades to whatever
    /// the backend can still deliver.
    ///
    /// Calling this again after a successful call is a no-op: the
    /// identity is frozen for the lifetime of the instance and platform
    /// setup runs at most once.
    ///
    /// # Errors
    ///
    /// [`ToastError::InvalidArgument`] when `app_id` or `display_name`
    /// is empty.
    pub async fn initialize(
        &self,
        app_id: &str,
        display_name: &str,
        icon_path: Option<&str>,
    ) -> Result<(), ToastError> {
        let identity = AppIdentity::new(app_id, display_name, icon_path)?;

        {
            let mut slot = self.identity.lock().expect("identity lock poisoned");
            if slot.is_some() {
                debug!(app_id, "already initialized; ignoring re-initialization");
                return Ok(());
            }
            *slot = Some(identity.clone());
        }

        if let Err(e) = self.notifier.setup(&identity, self.sink()).await {
            warn!(error = %e, app_id, "platform notifier setup failed; continuing without it");
        }

        Ok(())
    }

    /// Indicates whether [`initialize`](Self::initialize) has succeeded
    /// on this instance.
    pub fn is_initialized(&self) -> bool {
        self.identity
            .lock()
            .expect("identity lock poisoned")
            .is_some()
    }

    /// The identity stored by [`initialize`](Self::initialize), if any.
    pub fn identity(&self) -> Option<AppIdentity> {
        self.identity
            .lock()
            .expect("identity lock poisoned")
            .clone()
    }

    /// Show a toast/notification with the given content.
    ///
    /// Returns once the backend has accepted the request for display;
    /// it does not wait for the user to see or act on it. Backend
    /// failures are logged, never propagated.
    ///
    /// # Errors
    ///
    /// [`ToastError::NotInitialized`] before a successful
    /// [`initialize`](Self::initialize).
    pub async fn show(
        &self,
        title: &str,
        body: &str,
        options: Option<ToastOptions>,
    ) -> Result<(), ToastError> {
        let identity = self.identity().ok_or(ToastError::NotInitialized)?;
        let request = ToastRequest::new(title, body, options.unwrap_or_default());

        if let Err(e) = self.notifier.render(&identity, request, self.sink()).await {
            warn!(error = %e, title, "platform notifier failed to render notification");
        }

        Ok(())
    }

    /// [`show`](Self::show) with an info glyph prefixed to the title.
    pub async fn info(
        &self,
        title: &str,
        body: &str,
        options: Option<ToastOptions>,
    ) -> Result<(), ToastError> {
        self.show_with_severity(Severity::Info, title, body, options)
            .await
    }

    /// [`show`](Self::show) with a success glyph prefixed to the title.
    pub async fn success(
        &self,
        title: &str,
        body: &str,
        options: Option<ToastOptions>,
    ) -> Result<(), ToastError> {
        self.show_with_severity(Severity::Success, title, body, options)
            .await
    }

    /// [`show`](Self::show) with a warning glyph prefixed to the title.
    pub async fn warning(
        &self,
        title: &str,
        body: &str,
        options: Option<ToastOptions>,
    ) -> Result<(), ToastError> {
        self.show_with_severity(Severity::Warning, title, body, options)
            .await
    }

    /// [`show`](Self::show) with an error glyph prefixed to the title.
    pub async fn error(
        &self,
        title: &str,
        body: &str,
        options: Option<ToastOptions>,
    ) -> Result<(), ToastError> {
        self.show_with_severity(Severity::Error, title, body, options)
            .await
    }

    async fn show_with_severity(
        &self,
        severity: Severity,
        title: &str,
        body: &str,
        options: Option<ToastOptions>,
    ) -> Result<(), ToastError> {
        let title = format!("{} {}", severity.glyph(), title);
        self.show(&title, body, options).await
    }

    /// Register a callback invoked on every toast activation.
    ///
    /// Legal before or after `initialize`. Callbacks run in
    /// subscription order, on whatever thread the platform delivered
    /// the activation on.
    pub fn subscribe(
        &self,
        callback: impl Fn(&ToastActivation) + Send + Sync + 'static,
    ) -> Subscription {
        self.hub.subscribe(callback)
    }

    /// Remove a previously registered callback.
    ///
    /// A fan-out already in progress still completes with the snapshot
    /// it took; the callback is only guaranteed absent from later
    /// events.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.hub.unsubscribe(subscription);
    }

    fn sink(&self) -> ActivationSink {
        ActivationSink::new(Arc::clone(&self.hub))
    }
}
