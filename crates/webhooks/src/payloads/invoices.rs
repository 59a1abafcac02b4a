//! Invoice payloads.

use serde_json::{Value, json};

use persimmon_core::Requestor;

use crate::meta::{generate_meta, generate_requestor};
use crate::payloads::orders::{ORDER_FIELDS, ORDER_PRICE_FIELDS};
use crate::serializer::{Projection, quantize_price_fields};
use crate::types::{Invoice, Order};

// The embedded order is a reduced projection that still carries the
// legacy "token" alias next to the order fields.
fn order_payload_for_invoice(order: &Order) -> Value {
    let mut item = Projection::new(ORDER_FIELDS)
        .computed("token", |o: &Order| json!(o.id))
        .computed("user_email", |o: &Order| json!(o.user_email))
        .computed("created", |o: &Order| json!(o.created_at))
        .serialize_one(order);
    if let Value::Object(map) = &mut item {
        quantize_price_fields(map, ORDER_PRICE_FIELDS, order.currency);
    }
    item
}

#[tracing::instrument(skip_all)]
pub fn generate_invoice_payload(invoice: &Invoice, requestor: Option<&Requestor>) -> Value {
    let projection = Projection::new(&["number", "external_url"])
        .computed("created", |i: &Invoice| json!(i.created_at))
        .constant("meta", generate_meta(generate_requestor(requestor)))
        .computed("order", |i: &Invoice| {
            i.order.as_ref().map_or(Value::Null, order_payload_for_invoice)
        });
    Value::Array(vec![projection.serialize_one(invoice)])
}
