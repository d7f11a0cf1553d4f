//! Facade configuration value object

use serde::{Deserialize, Serialize};

/// Facade configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacadeConfig {
    pub app_id: Option<String>,
    pub display_name: Option<String>,
    pub icon_path: Option<String>,
    /// Backend preference: auto, notify-rust, notify-send, console, noop
    pub notifier: Option<String>,
}

impl FacadeConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_id: None,
            display_name: None,
            icon_path: None,
            notifier: Some("auto".to_string()),
        }
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_id: other.app_id.or(self.app_id),
            display_name: other.display_name.or(self.display_name),
            icon_path: other.icon_path.or(self.icon_path),
            notifier: other.notifier.or(self.notifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let base = FacadeConfig {
            app_id: Some("com.acme.base".into()),
            display_name: Some("Base".into()),
            icon_path: None,
            notifier: Some("auto".into()),
        };
        let override_with = FacadeConfig {
            app_id: Some("com.acme.cli".into()),
            display_name: None,
            icon_path: Some("/tmp/icon.png".into()),
            notifier: None,
        };

        let merged = base.merge(override_with);
        assert_eq!(merged.app_id.as_deref(), Some("com.acme.cli"));
        assert_eq!(merged.display_name.as_deref(), Some("Base"));
        assert_eq!(merged.icon_path.as_deref(), Some("/tmp/icon.png"));
        assert_eq!(merged.notifier.as_deref(), Some("auto"));
    }

    #[test]
    fn defaults_pick_auto_backend() {
        assert_eq!(FacadeConfig::defaults().notifier.as_deref(), Some("auto"));
    }
}
