//! Payload builders, one module per entity/event family.
//!
//! Every public `generate_*` function returns a `serde_json::Value` in the
//! exact shape subscribers receive. Entity payloads are arrays even for a
//! single object; event payloads that wrap an entity (excluded shipping
//! methods, gateway listing, transaction actions) are plain objects.

mod checkouts;
mod customers;
mod fulfillments;
mod invoices;
mod orders;
mod pages;
mod payments;
mod products;
mod sales;
mod shipping;
mod transactions;
mod translations;

pub use checkouts::{generate_checkout_payload, serialize_checkout_lines};
pub use customers::generate_customer_payload;
pub use fulfillments::{generate_fulfillment_lines_payload, generate_fulfillment_payload};
pub use invoices::generate_invoice_payload;
pub use orders::{
    ORDER_FIELDS, ORDER_PRICE_FIELDS, generate_order_lines_payload, generate_order_payload,
};
pub use pages::generate_page_payload;
pub use payments::{generate_list_gateways_payload, generate_payment_payload};
pub use products::{
    PRODUCT_FIELDS, PRODUCT_VARIANT_FIELDS, generate_collection_payload,
    generate_product_deleted_payload, generate_product_payload,
    generate_product_variant_listings_payload, generate_product_variant_payload,
    generate_product_variant_stocks_payload, generate_product_variant_with_stock_payload,
    serialize_attributes, serialize_product_channel_listing_payload,
};
pub use sales::generate_sale_payload;
pub use shipping::{
    generate_excluded_shipping_methods_for_checkout_payload,
    generate_excluded_shipping_methods_for_order_payload,
};
pub use transactions::generate_transaction_action_request_payload;
pub use translations::generate_translation_payload;

use serde_json::Value;

/// The single item of a one-element payload array.
///
/// Entity payloads are arrays; event payloads that embed an entity take
/// its item out of the wrapper.
pub(crate) fn into_single_item(payload: Value) -> Value {
    match payload {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        other => other,
    }
}
