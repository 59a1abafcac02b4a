//! Permissions, requestor identity, and authorization errors.
//!
//! Accessors on the app surface are gated by owner-or-permission checks;
//! payload envelopes record who triggered an event. Both take a
//! [`Requestor`], which is either an authenticated staff user, an app
//! acting through the API, or anonymous.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::id::{AppId, UserId};

/// A permission a staff user or app can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ManageApps,
    ManageChannels,
    ManageCheckouts,
    ManageDiscounts,
    ManageOrders,
    ManagePages,
    ManageProducts,
    ManageShipping,
    ManageTranslations,
    ManageUsers,
    HandlePayments,
}

impl Permission {
    /// Codename as displayed in permission lists and error messages.
    #[must_use]
    pub const fn codename(&self) -> &'static str {
        match self {
            Self::ManageApps => "MANAGE_APPS",
            Self::ManageChannels => "MANAGE_CHANNELS",
            Self::ManageCheckouts => "MANAGE_CHECKOUTS",
            Self::ManageDiscounts => "MANAGE_DISCOUNTS",
            Self::ManageOrders => "MANAGE_ORDERS",
            Self::ManagePages => "MANAGE_PAGES",
            Self::ManageProducts => "MANAGE_PRODUCTS",
            Self::ManageShipping => "MANAGE_SHIPPING",
            Self::ManageTranslations => "MANAGE_TRANSLATIONS",
            Self::ManageUsers => "MANAGE_USERS",
            Self::HandlePayments => "HANDLE_PAYMENTS",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.codename())
    }
}

/// Authorization filters that can satisfy a check instead of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationFilter {
    /// The requestor owns the object being accessed.
    Owner,
}

impl std::fmt::Display for AuthorizationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => f.write_str("OWNER"),
        }
    }
}

/// Identity of whoever triggered a request or event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requestor {
    /// An authenticated staff user.
    User {
        id: UserId,
        email: String,
        permissions: Vec<Permission>,
    },
    /// An app acting through the API.
    App {
        id: AppId,
        name: String,
        permissions: Vec<Permission>,
    },
    /// No authenticated identity.
    Anonymous,
}

impl Requestor {
    /// Whether the requestor holds the given permission.
    #[must_use]
    pub fn has_perm(&self, permission: Permission) -> bool {
        match self {
            Self::User { permissions, .. } | Self::App { permissions, .. } => {
                permissions.contains(&permission)
            }
            Self::Anonymous => false,
        }
    }

    /// Whether the requestor holds every one of the given permissions.
    #[must_use]
    pub fn has_perms(&self, required: &[Permission]) -> bool {
        required.iter().all(|p| self.has_perm(*p))
    }

    /// Whether the requestor is the app itself.
    #[must_use]
    pub fn is_app(&self, app_id: AppId) -> bool {
        matches!(self, Self::App { id, .. } if *id == app_id)
    }
}

/// Sentence fragment listing acceptable permissions, appended to field
/// descriptions and used in denial messages.
#[must_use]
pub fn one_of_permissions_required(
    permissions: &[Permission],
    filters: &[AuthorizationFilter],
) -> String {
    let names: Vec<String> = permissions
        .iter()
        .map(ToString::to_string)
        .chain(filters.iter().map(ToString::to_string))
        .collect();
    format!("Requires one of the following permissions: {}.", names.join(", "))
}

/// Authorization failure naming the permission set that would have
/// satisfied the check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", one_of_permissions_required(.permissions, .filters))]
pub struct PermissionDenied {
    /// Permissions, any one of which grants access.
    pub permissions: Vec<Permission>,
    /// Authorization filters that also grant access.
    pub filters: Vec<AuthorizationFilter>,
}

impl PermissionDenied {
    /// Denial requiring one of the given permissions.
    #[must_use]
    pub fn new(permissions: Vec<Permission>) -> Self {
        Self {
            permissions,
            filters: Vec::new(),
        }
    }

    /// Denial satisfied by object ownership as well as the permissions.
    #[must_use]
    pub fn with_owner(permissions: Vec<Permission>) -> Self {
        Self {
            permissions,
            filters: vec![AuthorizationFilter::Owner],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_user(permissions: Vec<Permission>) -> Requestor {
        Requestor::User {
            id: UserId::new(1),
            email: "staff@example.com".to_string(),
            permissions,
        }
    }

    #[test]
    fn user_permission_checks() {
        let user = staff_user(vec![Permission::ManageApps, Permission::ManageOrders]);
        assert!(user.has_perm(Permission::ManageApps));
        assert!(!user.has_perm(Permission::ManageProducts));
        assert!(user.has_perms(&[Permission::ManageApps, Permission::ManageOrders]));
        assert!(!user.has_perms(&[Permission::ManageApps, Permission::ManageProducts]));
    }

    #[test]
    fn anonymous_has_nothing() {
        assert!(!Requestor::Anonymous.has_perm(Permission::ManageApps));
        assert!(Requestor::Anonymous.has_perms(&[]));
    }

    #[test]
    fn app_identity_check() {
        let app = Requestor::App {
            id: AppId::new(7),
            name: "inventory-sync".to_string(),
            permissions: vec![],
        };
        assert!(app.is_app(AppId::new(7)));
        assert!(!app.is_app(AppId::new(8)));
        assert!(!staff_user(vec![]).is_app(AppId::new(7)));
    }

    #[test]
    fn denial_message_names_permission_set() {
        let err = PermissionDenied::with_owner(vec![Permission::ManageApps]);
        assert_eq!(
            err.to_string(),
            "Requires one of the following permissions: MANAGE_APPS, OWNER."
        );
    }
}
