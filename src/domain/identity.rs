//! Application identity value object

use crate::domain::error::ToastError;

/// Identity a host application registers with the notification platform.
///
/// Stored once per facade lifetime; never replaced after a successful
/// `initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    /// Unique application identifier. On some platforms this maps to a
    /// notification channel id or an AppUserModelID.
    pub app_id: String,
    /// Human readable application name.
    pub display_name: String,
    /// Optional app icon resource/asset path. Usage depends on the backend.
    pub icon_path: Option<String>,
}

impl AppIdentity {
    /// Validate and build an identity.
    ///
    /// `app_id` and `display_name` must contain at least one
    /// non-whitespace character.
    pub fn new(
        app_id: &str,
        display_name: &str,
        icon_path: Option<&str>,
    ) -> Result<Self, ToastError> {
        if app_id.trim().is_empty() {
            return Err(ToastError::InvalidArgument { field: "app_id" });
        }
        if display_name.trim().is_empty() {
            return Err(ToastError::InvalidArgument {
                field: "display_name",
            });
        }

        Ok(Self {
            app_id: app_id.to_owned(),
            display_name: display_name.to_owned(),
            icon_path: icon_path.map(str::to_owned),
        })
    }
}
