//! Process-wide facade instance
//!
//! Free-function mirror of [`Toast`](crate::Toast) for hosts that want
//! a single shared instance instead of threading one through their own
//! wiring. Built lazily with the platform default backend on first use.

use once_cell::sync::Lazy;

use crate::application::dispatch::Subscription;
use crate::application::facade::Toast;
use crate::domain::{AppIdentity, ToastActivation, ToastError, ToastOptions};

static TOAST: Lazy<Toast> = Lazy::new(Toast::with_default_notifier);

/// The shared facade instance.
pub fn toast() -> &'static Toast {
    &TOAST
}

/// See [`Toast::initialize`].
pub async fn initialize(
    app_id: &str,
    display_name: &str,
    icon_path: Option<&str>,
) -> Result<(), ToastError> {
    TOAST.initialize(app_id, display_name, icon_path).await
}

/// See [`Toast::is_initialized`].
pub fn is_initialized() -> bool {
    TOAST.is_initialized()
}

/// See [`Toast::identity`].
pub fn identity() -> Option<AppIdentity> {
    TOAST.identity()
}

/// See [`Toast::show`].
pub async fn show(title: &str, body: &str, options: Option<ToastOptions>) -> Result<(), ToastError> {
    TOAST.show(title, body, options).await
}

/// See [`Toast::info`].
pub async fn info(title: &str, body: &str, options: Option<ToastOptions>) -> Result<(), ToastError> {
    TOAST.info(title, body, options).await
}

/// See [`Toast::success`].
pub async fn success(
    title: &str,
    body: &str,
    options: Option<ToastOptions>,
) -> Result<(), ToastError> {
    TOAST.success(title, body, options).await
}

/// See [`Toast::warning`].
pub async fn warning(
    title: &str,
    body: &str,
    options: Option<ToastOptions>,
) -> Result<(), ToastError> {
    TOAST.warning(title, body, options).await
}

/// See [`Toast::error`].
pub async fn error(title: &str, body: &str, options: Option<ToastOptions>) -> Result<(), ToastError> {
    TOAST.error(title, body, options).await
}

/// See [`Toast::subscribe`].
pub fn subscribe(callback: impl Fn(&ToastActivation) + Send + Sync + 'static) -> Subscription {
    TOAST.subscribe(callback)
}

/// See [`Toast::unsubscribe`].
pub fn unsubscribe(subscription: Subscription) {
    TOAST.unsubscribe(subscription);
}
