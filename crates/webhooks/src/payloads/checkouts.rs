//! Checkout payloads.

use serde_json::{Value, json};

use persimmon_core::{ADDRESS_FIELDS, Requestor, quantize_price};

use crate::meta::{generate_meta, generate_requestor};
use crate::payloads::orders::{collection_point_payload, shipping_method_payload};
use crate::serializer::{Projection, project, quantize_price_fields};
use crate::types::{Checkout, Warehouse};

/// Checkout lines in the flat shape subscribers receive, with the base
/// price quantized.
#[tracing::instrument(skip_all)]
pub fn serialize_checkout_lines(checkout: &Checkout) -> Value {
    Value::Array(
        checkout
            .lines
            .iter()
            .map(|line| {
                json!({
                    "sku": line.sku,
                    "quantity": line.quantity,
                    "base_price": quantize_price(line.base_price, line.currency),
                    "currency": line.currency,
                    "full_name": line.full_name(),
                    "product_name": line.product_name,
                    "variant_name": line.variant_name,
                })
            })
            .collect(),
    )
}

/// The full checkout payload. The global ID is emitted under `"token"`.
///
/// `warehouse` is the stock location serving the checkout's shipping
/// country, when the caller can resolve one; its address is exposed as
/// `warehouse_address`.
#[tracing::instrument(skip_all)]
pub fn generate_checkout_payload(
    checkout: &Checkout,
    warehouse: Option<&Warehouse>,
    requestor: Option<&Requestor>,
) -> Value {
    const CHECKOUT_FIELDS: &[&str] = &[
        "last_change",
        "status",
        "email",
        "quantity",
        "currency",
        "discount_amount",
        "discount_name",
        "language_code",
        "private_metadata",
        "metadata",
    ];
    const USER_FIELDS: &[&str] = &["email", "first_name", "last_name"];
    const CHANNEL_FIELDS: &[&str] = &["slug", "currency_code"];

    let projection = Projection::new(CHECKOUT_FIELDS)
        .id_key("token")
        .related("channel", CHANNEL_FIELDS, |c: &Checkout| Some(&c.channel))
        .related("user", USER_FIELDS, |c: &Checkout| c.user.as_ref())
        .related("billing_address", ADDRESS_FIELDS, |c: &Checkout| {
            c.billing_address.as_ref()
        })
        .related("shipping_address", ADDRESS_FIELDS, |c: &Checkout| {
            c.shipping_address.as_ref()
        })
        .constant(
            "warehouse_address",
            warehouse.map_or(Value::Null, |w| {
                Value::Object(project(&w.address, ADDRESS_FIELDS))
            }),
        )
        .constant(
            "shipping_method",
            checkout
                .shipping_method
                .as_ref()
                .and_then(|method| shipping_method_payload(method, &checkout.channel.slug))
                .unwrap_or(Value::Null),
        )
        .constant("lines", serialize_checkout_lines(checkout))
        .constant(
            "collection_point",
            checkout
                .collection_point
                .as_ref()
                .map_or(Value::Null, collection_point_payload),
        )
        .constant("meta", generate_meta(generate_requestor(requestor)))
        .computed("created", |c: &Checkout| json!(c.created_at));

    let mut item = projection.serialize_one(checkout);
    if let Value::Object(map) = &mut item {
        quantize_price_fields(map, &["discount_amount"], checkout.currency);
    }
    Value::Array(vec![item])
}
