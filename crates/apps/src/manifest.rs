//! The app manifest fetched during installation.

use serde::{Deserialize, Serialize};

use persimmon_core::{AppExtensionMount, AppExtensionTarget, Permission};

/// The manifest definition a third-party app publishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub identifier: String,
    pub version: String,
    pub name: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default)]
    pub token_target_url: Option<String>,
    #[serde(default)]
    pub data_privacy_url: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub support_url: Option<String>,
    #[serde(default)]
    pub extensions: Vec<ManifestExtension>,
}

impl Manifest {
    /// Deprecated alias for [`Self::app_url`]; older dashboards still read
    /// `configuration_url`.
    #[must_use]
    pub fn configuration_url(&self) -> Option<&str> {
        self.app_url.as_deref()
    }

    /// Deprecated alias for [`Self::data_privacy_url`].
    #[must_use]
    pub fn data_privacy(&self) -> Option<&str> {
        self.data_privacy_url.as_deref()
    }
}

/// An extension declared in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestExtension {
    pub label: String,
    pub url: String,
    pub mount: AppExtensionMount,
    #[serde(default)]
    pub target: Option<AppExtensionTarget>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl ManifestExtension {
    /// Effective open target; unset targets fall back to popup.
    #[must_use]
    pub fn target(&self) -> AppExtensionTarget {
        self.target.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_with_optional_fields_absent() {
        let manifest: Manifest = serde_json::from_value(serde_json::json!({
            "identifier": "inventory-sync",
            "version": "2.1.0",
            "name": "Inventory Sync",
        }))
        .unwrap();
        assert!(manifest.permissions.is_empty());
        assert!(manifest.extensions.is_empty());
        assert_eq!(manifest.configuration_url(), None);
    }

    #[test]
    fn deprecated_aliases_mirror_new_fields() {
        let manifest: Manifest = serde_json::from_value(serde_json::json!({
            "identifier": "inventory-sync",
            "version": "2.1.0",
            "name": "Inventory Sync",
            "app_url": "https://app.example.com/",
            "data_privacy_url": "https://app.example.com/privacy",
        }))
        .unwrap();
        assert_eq!(manifest.configuration_url(), Some("https://app.example.com/"));
        assert_eq!(
            manifest.data_privacy(),
            Some("https://app.example.com/privacy")
        );
    }

    #[test]
    fn extension_target_defaults_to_popup() {
        let extension: ManifestExtension = serde_json::from_value(serde_json::json!({
            "label": "Export",
            "url": "/export",
            "mount": "PRODUCT_OVERVIEW_MORE_ACTIONS",
        }))
        .unwrap();
        assert_eq!(extension.target(), AppExtensionTarget::Popup);
    }
}
