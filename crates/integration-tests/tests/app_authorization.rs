//! Authorization flow over app records: gated relations, token issuance
//! and extension URL resolution working together.

use persimmon_apps::{
    AccessTokenIssuer, AppExtension, AppExtensionId, access_token_for_app,
    access_token_for_extension, has_required_permission,
};
use persimmon_core::{
    AppExtensionMount, AppExtensionTarget, AppId, Permission, Requestor, UserId,
};
use persimmon_integration_tests::{staff_user, third_party_app};

struct RecordingIssuer;

impl AccessTokenIssuer for RecordingIssuer {
    fn issue_token(&self, audience: &str, user_id: UserId, permissions: &[Permission]) -> String {
        let perms: Vec<&str> = permissions.iter().map(Permission::codename).collect();
        format!("{audience}|{user_id}|{}", perms.join(","))
    }
}

fn extension() -> AppExtension {
    AppExtension {
        id: AppExtensionId::new(5),
        app_id: AppId::new(11),
        label: "Export".to_string(),
        url: "/export".to_string(),
        mount: AppExtensionMount::ProductOverviewMoreActions,
        target: None,
        permissions: vec![Permission::ManageProducts],
    }
}

#[test]
fn manager_reads_relations_stranger_does_not() {
    let app = third_party_app();

    let manager = staff_user(vec![Permission::ManageApps]);
    assert!(has_required_permission(&app, &manager).is_ok());
    assert_eq!(app.tokens(&manager).expect("gated ok").len(), 1);
    assert_eq!(
        app.metafield(&manager, "public_key").expect("gated ok"),
        Some("pk_123")
    );

    let stranger = staff_user(vec![Permission::ManageOrders]);
    let err = app.webhooks(&stranger).expect_err("must be denied");
    assert_eq!(
        err.to_string(),
        "Requires one of the following permissions: MANAGE_APPS, OWNER."
    );
}

#[test]
fn app_reads_itself_but_not_other_apps() {
    let app = third_party_app();

    let own = Requestor::App {
        id: app.id,
        name: app.name.clone(),
        permissions: vec![],
    };
    assert!(app.tokens(&own).is_ok());

    let other = Requestor::App {
        id: AppId::new(99),
        name: "someone-else".to_string(),
        permissions: vec![],
    };
    assert!(app.tokens(&other).is_err());
}

#[test]
fn token_permissions_are_the_intersection() {
    let app = third_party_app();
    // the app holds MANAGE_PRODUCTS + MANAGE_ORDERS; the user only one
    let user = staff_user(vec![Permission::ManageProducts, Permission::ManageApps]);

    let token = access_token_for_app(&app, &user, &RecordingIssuer).expect("staff user");
    assert_eq!(token, "inventory-sync|1|MANAGE_PRODUCTS");
}

#[test]
fn extension_flow_resolves_url_and_scopes_token() {
    let app = third_party_app();
    let ext = extension();
    let user = staff_user(vec![Permission::ManageProducts]);

    assert_eq!(ext.target(), AppExtensionTarget::Popup);
    assert_eq!(
        ext.effective_url(app.app_url.as_deref()),
        "https://app.example.com/export"
    );

    let token =
        access_token_for_extension(&ext, &app, &user, &RecordingIssuer).expect("staff user");
    assert_eq!(token, "inventory-sync|1|MANAGE_PRODUCTS");
}

#[test]
fn anonymous_gets_neither_relations_nor_tokens() {
    let app = third_party_app();
    assert!(app.metadata(&Requestor::Anonymous).is_err());
    assert!(access_token_for_app(&app, &Requestor::Anonymous, &RecordingIssuer).is_none());
}
