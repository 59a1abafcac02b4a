//! Authorization-aware accessors over app records.
//!
//! The raw structs in [`crate::models`] belong to the data layer; anything
//! surfaced to API clients goes through these functions, which enforce the
//! owner-or-`MANAGE_APPS` rule and return [`PermissionDenied`] naming the
//! acceptable permission set.

use url::Url;

use persimmon_core::{Metadata, Permission, PermissionDenied, Requestor, UserId};

use crate::models::{App, AppExtension, AppToken, Webhook};

/// Check that the requestor is the app itself or holds `MANAGE_APPS`.
///
/// # Errors
///
/// Returns [`PermissionDenied`] listing `MANAGE_APPS` and `OWNER`.
pub fn has_required_permission(app: &App, requestor: &Requestor) -> Result<(), PermissionDenied> {
    if requestor.is_app(app.id) || requestor.has_perm(Permission::ManageApps) {
        Ok(())
    } else {
        Err(PermissionDenied::with_owner(vec![Permission::ManageApps]))
    }
}

impl App {
    /// Tokens issued to this app (last four characters only).
    ///
    /// # Errors
    ///
    /// Requires owner-or-`MANAGE_APPS`.
    pub fn tokens(&self, requestor: &Requestor) -> Result<&[AppToken], PermissionDenied> {
        has_required_permission(self, requestor)?;
        Ok(&self.tokens)
    }

    /// Webhook subscriptions registered by this app.
    ///
    /// # Errors
    ///
    /// Requires owner-or-`MANAGE_APPS`.
    pub fn webhooks(&self, requestor: &Requestor) -> Result<&[Webhook], PermissionDenied> {
        has_required_permission(self, requestor)?;
        Ok(&self.webhooks)
    }

    /// Public metadata. Readable by the app itself or `MANAGE_APPS` holders.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionDenied`] for anyone else.
    pub fn metadata(&self, requestor: &Requestor) -> Result<&Metadata, PermissionDenied> {
        has_required_permission(self, requestor)?;
        Ok(&self.metadata)
    }

    /// A single public metadata value by key.
    ///
    /// # Errors
    ///
    /// Same access rule as [`Self::metadata`].
    pub fn metafield(
        &self,
        requestor: &Requestor,
        key: &str,
    ) -> Result<Option<&str>, PermissionDenied> {
        Ok(self.metadata(requestor)?.get(key))
    }

    /// A subset of public metadata. `None` keys means all entries.
    ///
    /// # Errors
    ///
    /// Same access rule as [`Self::metadata`].
    pub fn metafields(
        &self,
        requestor: &Requestor,
        keys: Option<&[&str]>,
    ) -> Result<Metadata, PermissionDenied> {
        let metadata = self.metadata(requestor)?;
        Ok(match keys {
            Some(keys) => metadata
                .iter()
                .filter(|(k, _)| keys.contains(k))
                .collect(),
            None => metadata.clone(),
        })
    }

    /// Deprecated alias for `app_url`; older dashboards still read
    /// `configuration_url`.
    #[must_use]
    pub fn configuration_url(&self) -> Option<&str> {
        self.app_url.as_deref()
    }
}

impl AppExtension {
    /// The app this extension belongs to, gated like every other app
    /// relation.
    ///
    /// # Errors
    ///
    /// Requires owner-or-`MANAGE_APPS`.
    pub fn app<'a>(
        &self,
        app: &'a App,
        requestor: &Requestor,
    ) -> Result<&'a App, PermissionDenied> {
        debug_assert_eq!(app.id, self.app_id);
        has_required_permission(app, requestor)?;
        Ok(app)
    }

    /// Effective URL of the extension view.
    ///
    /// Relative URLs opened as popups resolve against the app's own URL;
    /// anything else is returned as declared.
    #[must_use]
    pub fn effective_url(&self, app_url: Option<&str>) -> String {
        resolve_extension_url(&self.url, self.target(), app_url)
    }
}

/// Resolve an extension URL against the owning app's URL.
fn resolve_extension_url(
    url: &str,
    target: persimmon_core::AppExtensionTarget,
    app_url: Option<&str>,
) -> String {
    use persimmon_core::AppExtensionTarget;
    if url.starts_with('/') && target == AppExtensionTarget::Popup {
        if let Some(base) = app_url {
            if let Ok(joined) = Url::parse(base).and_then(|b| b.join(url)) {
                return joined.to_string();
            }
        }
    }
    url.to_string()
}

/// Seam for minting the short-lived access token a dashboard user gets for
/// a third-party app. The token format (JWT or otherwise) belongs to the
/// host's auth layer.
pub trait AccessTokenIssuer {
    /// Mint a token for `user_id` carrying exactly `permissions`.
    fn issue_token(&self, audience: &str, user_id: UserId, permissions: &[Permission]) -> String;
}

/// Access token for a third-party app.
///
/// Only staff users get tokens, only for third-party apps, and the token
/// carries the intersection of the app's permissions and the user's own.
#[must_use]
pub fn access_token_for_app(
    app: &App,
    requestor: &Requestor,
    issuer: &dyn AccessTokenIssuer,
) -> Option<String> {
    issue_scoped_token(app, requestor, &app.permissions, issuer)
}

/// Access token for an app extension, scoped to the extension's own
/// permission list rather than the whole app's.
#[must_use]
pub fn access_token_for_extension(
    extension: &AppExtension,
    app: &App,
    requestor: &Requestor,
    issuer: &dyn AccessTokenIssuer,
) -> Option<String> {
    issue_scoped_token(app, requestor, &extension.permissions, issuer)
}

fn issue_scoped_token(
    app: &App,
    requestor: &Requestor,
    requested: &[Permission],
    issuer: &dyn AccessTokenIssuer,
) -> Option<String> {
    if app.app_type != persimmon_core::AppType::Thirdparty {
        return None;
    }
    let Requestor::User { id, .. } = requestor else {
        return None;
    };
    let granted: Vec<Permission> = requested
        .iter()
        .copied()
        .filter(|p| requestor.has_perm(*p))
        .collect();
    Some(issuer.issue_token(&app.name, *id, &granted))
}
