//! Shipping method filtering payloads.

use serde_json::{Value, json};

use crate::payloads::{generate_checkout_payload, generate_order_payload, into_single_item};
use crate::types::{Checkout, Order, ShippingMethodData, Warehouse};

fn shipping_method_data_payload(method: &ShippingMethodData) -> Value {
    json!({
        "id": method.graphql_id,
        "price": method.price.amount,
        "currency": method.price.currency,
        "name": method.name,
        "maximum_order_weight": method.maximum_order_weight,
        "minimum_order_weight": method.minimum_order_weight,
        "maximum_delivery_days": method.maximum_delivery_days,
        "minimum_delivery_days": method.minimum_delivery_days,
    })
}

/// The payload apps use to exclude shipping methods from an order.
#[tracing::instrument(skip_all)]
pub fn generate_excluded_shipping_methods_for_order_payload(
    order: &Order,
    available_shipping_methods: &[ShippingMethodData],
) -> Value {
    json!({
        "order": into_single_item(generate_order_payload(order, None, true)),
        "shipping_methods": available_shipping_methods
            .iter()
            .map(shipping_method_data_payload)
            .collect::<Vec<_>>(),
    })
}

/// The payload apps use to exclude shipping methods from a checkout.
#[tracing::instrument(skip_all)]
pub fn generate_excluded_shipping_methods_for_checkout_payload(
    checkout: &Checkout,
    warehouse: Option<&Warehouse>,
    available_shipping_methods: &[ShippingMethodData],
) -> Value {
    json!({
        "checkout": into_single_item(generate_checkout_payload(checkout, warehouse, None)),
        "shipping_methods": available_shipping_methods
            .iter()
            .map(shipping_method_data_payload)
            .collect::<Vec<_>>(),
    })
}
