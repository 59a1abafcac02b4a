//! The meta envelope attached to every top-level payload.

use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

use persimmon_core::{Requestor, global_id};

/// Schema version stamped into every payload.
pub const PAYLOAD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Describe the identity that triggered an event.
///
/// Anonymous or absent requestors produce `{"id": null, "type": null}`;
/// users are identified by their `User` global ID, apps by name.
#[must_use]
pub fn generate_requestor(requestor: Option<&Requestor>) -> Value {
    match requestor {
        None | Some(Requestor::Anonymous) => json!({"id": null, "type": null}),
        Some(Requestor::User { id, .. }) => {
            json!({"id": global_id("User", id), "type": "user"})
        }
        Some(Requestor::App { name, .. }) => json!({"id": name, "type": "app"}),
    }
}

/// Build the `{issued_at, version, issuing_principal}` envelope.
#[must_use]
pub fn generate_meta(requestor_data: Value) -> Value {
    json!({
        "issued_at": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        "version": PAYLOAD_VERSION,
        "issuing_principal": requestor_data,
    })
}
