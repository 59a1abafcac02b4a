//! Persimmon Apps - typed app surface with authorization-aware accessors.
//!
//! Exposes the `App`, `AppToken`, `AppExtension`, `AppInstallation` and
//! `Manifest` types. Sensitive relations (tokens, webhooks, private
//! metadata) are only reachable through accessors that take a
//! [`persimmon_core::Requestor`] and enforce owner-or-permission checks,
//! returning [`persimmon_core::PermissionDenied`] on failure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod manifest;
pub mod models;

pub use access::{
    AccessTokenIssuer, access_token_for_app, access_token_for_extension, has_required_permission,
};
pub use manifest::{Manifest, ManifestExtension};
pub use models::{
    App, AppExtension, AppExtensionId, AppInstallation, AppInstallationId, AppToken, AppTokenId,
    JobStatus, Webhook, WebhookId,
};
