//! Fulfillment payloads.

use rust_decimal::Decimal;
use serde_json::{Value, json};

use persimmon_core::{ADDRESS_FIELDS, Address, Requestor, global_id, quantize_price};

use crate::meta::{generate_meta, generate_requestor};
use crate::payloads::{generate_order_payload, into_single_item};
use crate::serializer::{PayloadEntity, Projection, project, quantize_price_fields};
use crate::types::{Fulfillment, Order};

/// Fulfillment lines with pricing pulled from their order lines.
#[tracing::instrument(skip_all)]
pub fn generate_fulfillment_lines_payload(fulfillment: &Fulfillment) -> Value {
    Value::Array(
        fulfillment
            .lines
            .iter()
            .map(|line| {
                let order_line = &line.order_line;
                let currency = order_line.currency;
                let undiscounted_net =
                    quantize_price(order_line.undiscounted_unit_price_net_amount, currency);
                let undiscounted_gross =
                    quantize_price(order_line.undiscounted_unit_price_gross_amount, currency);
                let quantity = Decimal::from(line.quantity);
                json!({
                    "type": "FulfillmentLine",
                    "id": line.payload_id(),
                    "quantity": line.quantity,
                    "product_name": order_line.product_name,
                    "variant_name": order_line.variant_name,
                    "product_sku": order_line.product_sku,
                    "product_variant_id": order_line
                        .variant_id
                        .map(|id| global_id("ProductVariant", id)),
                    "weight": order_line.variant_weight_grams,
                    "weight_unit": "gram",
                    "product_type": order_line.product_type,
                    "unit_price_net": quantize_price(order_line.unit_price_net_amount, currency),
                    "unit_price_gross":
                        quantize_price(order_line.unit_price_gross_amount, currency),
                    "undiscounted_unit_price_net": undiscounted_net,
                    "undiscounted_unit_price_gross": undiscounted_gross,
                    "total_price_net_amount": undiscounted_net * quantity,
                    "total_price_gross_amount": undiscounted_gross * quantity,
                    "currency": currency,
                    "warehouse_id": line.warehouse_id.map(|id| global_id("Warehouse", id)),
                    "sale_id": order_line.sale_id,
                    "voucher_code": order_line.voucher_code,
                })
            })
            .collect(),
    )
}

/// The standalone fulfillment payload, with the full order embedded.
///
/// `warehouse_address` is the address of the warehouse the fulfillment
/// shipped from, when the caller can resolve one.
#[tracing::instrument(skip_all)]
pub fn generate_fulfillment_payload(
    fulfillment: &Fulfillment,
    order: &Order,
    warehouse_address: Option<&Address>,
    requestor: Option<&Requestor>,
) -> Value {
    const FULFILLMENT_FIELDS: &[&str] = &[
        "status",
        "tracking_number",
        "shipping_refund_amount",
        "total_refund_amount",
    ];
    const FULFILLMENT_PRICE_FIELDS: &[&str] = &["shipping_refund_amount", "total_refund_amount"];

    let projection = Projection::new(FULFILLMENT_FIELDS)
        .computed("user_email", |_: &Fulfillment| json!(order.user_email))
        .constant(
            "warehouse_address",
            warehouse_address.map_or(Value::Null, |address| {
                Value::Object(project(address, ADDRESS_FIELDS))
            }),
        )
        .constant(
            "order",
            into_single_item(generate_order_payload(order, None, false)),
        )
        .computed("lines", generate_fulfillment_lines_payload)
        .constant("meta", generate_meta(generate_requestor(requestor)));

    let mut item = projection.serialize_one(fulfillment);
    if let Value::Object(map) = &mut item {
        quantize_price_fields(map, FULFILLMENT_PRICE_FIELDS, order.currency);
    }
    Value::Array(vec![item])
}
