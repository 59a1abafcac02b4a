//! App, token, extension and installation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use persimmon_core::{
    AppExtensionMount, AppExtensionTarget, AppId, AppType, Metadata, Permission, define_id,
};

define_id!(AppTokenId);
define_id!(AppExtensionId);
define_id!(AppInstallationId);
define_id!(WebhookId);

/// An installed app.
///
/// Tokens, webhooks and metadata are reachable through the gated accessors
/// in [`crate::access`]; the raw fields exist for the data layer that owns
/// these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub app_type: AppType,
    pub about: Option<String>,
    pub data_privacy_url: Option<String>,
    pub homepage_url: Option<String>,
    pub support_url: Option<String>,
    /// URL to the iframe with the app. The deprecated `configuration_url`
    /// surface mirrors this value.
    pub app_url: Option<String>,
    /// URL of the manifest used during installation.
    pub manifest_url: Option<String>,
    pub version: Option<String>,
    pub permissions: Vec<Permission>,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
    pub tokens: Vec<AppToken>,
    pub webhooks: Vec<Webhook>,
    pub extensions: Vec<AppExtension>,
}

/// An API token issued to an app.
///
/// The full token value never leaves the auth layer; only the last four
/// characters are stored for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppToken {
    pub id: AppTokenId,
    /// Name of the authenticated token.
    pub name: String,
    /// Last 4 characters of the token.
    pub token_last_4: String,
}

impl AppToken {
    /// Displayable token fragment (the last four characters).
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.token_last_4
    }
}

/// A dashboard extension registered by an app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppExtension {
    pub id: AppExtensionId,
    pub app_id: AppId,
    /// Label shown in the dashboard.
    pub label: String,
    /// URL of the view the extension's iframe loads. May be relative to the
    /// app's `app_url`.
    pub url: String,
    pub mount: AppExtensionMount,
    pub target: Option<AppExtensionTarget>,
    pub permissions: Vec<Permission>,
}

impl AppExtension {
    /// Effective open target; unset targets fall back to popup.
    #[must_use]
    pub fn target(&self) -> AppExtensionTarget {
        self.target.unwrap_or_default()
    }
}

/// A webhook subscription registered by an app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    pub id: WebhookId,
    pub name: String,
    pub target_url: String,
    pub is_active: bool,
    /// Wire names of the subscribed events.
    pub events: Vec<String>,
    /// Secret used to sign deliveries, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

/// Background job status for an ongoing app installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Success,
    Failed,
    Deleted,
}

/// An ongoing installation of an app from a manifest URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInstallation {
    pub id: AppInstallationId,
    pub app_name: String,
    pub manifest_url: String,
    pub status: JobStatus,
    /// Failure detail when `status` is `Failed`.
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_token_exposes_only_last_four() {
        let token = AppToken {
            id: AppTokenId::new(1),
            name: "default".to_string(),
            token_last_4: "b3x9".to_string(),
        };
        assert_eq!(token.auth_token(), "b3x9");
    }

    #[test]
    fn extension_target_defaults_to_popup() {
        let extension = AppExtension {
            id: AppExtensionId::new(1),
            app_id: AppId::new(1),
            label: "Export".to_string(),
            url: "/export".to_string(),
            mount: AppExtensionMount::ProductOverviewMoreActions,
            target: None,
            permissions: vec![],
        };
        assert_eq!(extension.target(), AppExtensionTarget::Popup);
    }
}
