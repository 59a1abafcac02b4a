//! End-to-end checks of the webhook payload documents.
//!
//! These cover the contract subscribers actually parse: field names, the
//! meta envelope, quantized money strings and global IDs, across entity
//! builders and the sample-payload flow.

use serde_json::{Value, json};
use uuid::Uuid;

use persimmon_core::{Permission, global_id, parse_global_id};
use persimmon_integration_tests::{checkout, order, staff_user};
use persimmon_webhooks::payloads::{
    generate_checkout_payload, generate_excluded_shipping_methods_for_order_payload,
    generate_fulfillment_payload, generate_order_payload,
};
use persimmon_webhooks::sample::{OrderSampleFilter, SampleDataSource, generate_sample_payload};
use persimmon_webhooks::types::{Checkout, Fulfillment, Order, Page, Product, Warehouse};
use persimmon_webhooks::{PAYLOAD_VERSION, WebhookConfig, WebhookEvent, generate_requestor};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn config() -> WebhookConfig {
    WebhookConfig::new("https://shop.example.com".parse().expect("valid url"))
}

#[test]
fn order_payload_is_parseable_round_trip() {
    init_tracing();
    let payload = generate_order_payload(&order(), None, true);

    // the document survives a serialize/parse cycle byte-for-byte
    let text = serde_json::to_string(&payload).expect("serializable");
    let reparsed: Value = serde_json::from_str(&text).expect("parseable");
    assert_eq!(reparsed, payload);

    let item = &payload[0];
    let raw_id = parse_global_id(item["id"].as_str().expect("id"), "Order").expect("global id");
    assert_eq!(raw_id, Uuid::from_u128(0xfeed).to_string());
    assert_eq!(item["token"].as_str(), Some(raw_id.as_str()));
}

#[test]
fn meta_envelope_names_the_requestor() {
    init_tracing();
    let requestor = staff_user(vec![Permission::ManageOrders]);
    let payload = generate_order_payload(&order(), Some(&requestor), true);
    let meta = &payload[0]["meta"];

    assert_eq!(meta["version"], json!(PAYLOAD_VERSION));
    assert_eq!(meta["issuing_principal"]["type"], json!("user"));
    assert_eq!(
        meta["issuing_principal"]["id"],
        generate_requestor(Some(&requestor))["id"]
    );
    assert!(meta["issued_at"].as_str().expect("issued_at").ends_with('Z'));
}

#[test]
fn money_fields_come_out_as_quantized_strings() {
    init_tracing();
    let payload = generate_order_payload(&order(), None, false);
    let item = &payload[0];

    for field in [
        "total_net_amount",
        "total_gross_amount",
        "shipping_price_net_amount",
        "shipping_price_gross_amount",
    ] {
        let value = item[field].as_str().unwrap_or_else(|| panic!("{field} should be a string"));
        assert!(value.contains('.'), "{field} should carry minor units: {value}");
    }

    let line = &item["lines"][0];
    assert_eq!(line["unit_price_gross_amount"], json!("12.50"));
    assert_eq!(line["tax_rate"], json!("0.25"));
}

#[test]
fn embedded_fulfillments_match_standalone_payload_lines() {
    init_tracing();
    let order = order();
    let fulfillment = &order.fulfillments[0];

    let order_payload = generate_order_payload(&order, None, false);
    let standalone = generate_fulfillment_payload(fulfillment, &order, None, None);

    assert_eq!(
        order_payload[0]["fulfillments"][0]["lines"],
        standalone[0]["lines"]
    );
}

#[test]
fn checkout_payload_resolves_shipping_method_for_its_channel() {
    init_tracing();
    let payload = generate_checkout_payload(&checkout(), None, None);
    let item = &payload[0];

    assert_eq!(item["shipping_method"]["name"], json!("Standard"));
    assert_eq!(item["shipping_method"]["price_amount"], json!("5.00"));
    assert_eq!(item["lines"][0]["full_name"], json!("Mug (White)"));
    assert_eq!(
        item["token"],
        json!(global_id("Checkout", Uuid::from_u128(0x77)))
    );
}

#[test]
fn excluded_shipping_payload_wraps_full_order() {
    init_tracing();
    let payload = generate_excluded_shipping_methods_for_order_payload(&order(), &[]);

    assert_eq!(payload["order"]["type"], json!("Order"));
    assert_eq!(payload["shipping_methods"], json!([]));
}

struct StoreStub;

impl SampleDataSource for StoreStub {
    fn sample_order(&self, filter: OrderSampleFilter) -> Option<Order> {
        (filter == OrderSampleFilter::Unfulfilled).then(order)
    }

    fn sample_checkout(&self) -> Option<Checkout> {
        Some(checkout())
    }

    fn sample_product(&self) -> Option<Product> {
        None
    }

    fn sample_page(&self) -> Option<Page> {
        None
    }

    fn sample_fulfillment(&self) -> Option<(Fulfillment, Order)> {
        let order = order();
        Some((order.fulfillments[0].clone(), order))
    }

    fn warehouse_for_country(&self, _country: &str) -> Option<Warehouse> {
        None
    }
}

#[test]
fn sample_order_payload_is_anonymized() {
    init_tracing();
    let payload = generate_sample_payload(WebhookEvent::OrderCreated, &StoreStub, &config())
        .expect("sample exists");
    let item = &payload[0];

    // totals survive, identity does not
    assert_eq!(item["total_gross_amount"], json!("31.25"));
    assert_ne!(item["user_email"], json!("nora@example.net"));
    assert_ne!(item["shipping_address"]["first_name"], json!("Nora"));
}

#[test]
fn sample_checkout_payload_has_blanked_token() {
    init_tracing();
    let payload = generate_sample_payload(WebhookEvent::CheckoutCreated, &StoreStub, &config())
        .expect("sample exists");
    assert_eq!(payload[0]["token"], json!(Uuid::from_u128(1)));
}

#[test]
fn events_without_samples_return_none() {
    init_tracing();
    assert!(
        generate_sample_payload(WebhookEvent::SaleCreated, &StoreStub, &config()).is_none()
    );
}
