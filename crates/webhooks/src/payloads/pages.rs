//! Static page payloads.

use serde_json::{Value, json};

use persimmon_core::Requestor;

use crate::meta::{generate_meta, generate_requestor};
use crate::serializer::Projection;
use crate::types::Page;

#[tracing::instrument(skip_all)]
pub fn generate_page_payload(page: &Page, requestor: Option<&Requestor>) -> Value {
    const PAGE_FIELDS: &[&str] = &[
        "private_metadata",
        "metadata",
        "title",
        "content",
        "published_at",
        "is_published",
        "updated_at",
    ];
    // page payloads historically carry the meta envelope under "data"
    let projection = Projection::new(PAGE_FIELDS)
        .constant("data", generate_meta(generate_requestor(requestor)))
        .computed("publication_date", |p: &Page| json!(p.published_at));
    Value::Array(vec![projection.serialize_one(page)])
}
