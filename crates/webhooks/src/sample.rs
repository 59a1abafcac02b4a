//! Sample payloads for the dashboard's "test webhook" flow.
//!
//! Samples are generated from real data pulled through a
//! [`SampleDataSource`], anonymized before serialization so app developers
//! never see live customer details.

use serde_json::{Value, json};
use uuid::Uuid;

use crate::anonymize::{anonymize_checkout, anonymize_order, generate_fake_user};
use crate::config::WebhookConfig;
use crate::events::WebhookEvent;
use crate::payloads::{
    generate_checkout_payload, generate_customer_payload, generate_fulfillment_payload,
    generate_order_payload, generate_page_payload, generate_product_payload,
};
use crate::types::{Checkout, Fulfillment, Order, Page, Product, Warehouse};

/// How the sample order should be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSampleFilter {
    Unfulfilled,
    FullyPaid,
    Fulfilled,
    Canceled,
}

/// Supplies representative objects for sample payloads.
///
/// Each method returns a random matching object, or `None` when the store
/// holds nothing suitable yet.
pub trait SampleDataSource {
    fn sample_order(&self, filter: OrderSampleFilter) -> Option<Order>;
    fn sample_checkout(&self) -> Option<Checkout>;
    fn sample_product(&self) -> Option<Product>;
    fn sample_page(&self) -> Option<Page>;
    /// A fulfillment together with the order it belongs to.
    fn sample_fulfillment(&self) -> Option<(Fulfillment, Order)>;
    /// The warehouse serving a country, for checkout `warehouse_address`.
    fn warehouse_for_country(&self, country: &str) -> Option<Warehouse>;
}

fn order_filter_for(event: WebhookEvent) -> Option<OrderSampleFilter> {
    match event {
        WebhookEvent::OrderCreated => Some(OrderSampleFilter::Unfulfilled),
        WebhookEvent::OrderFullyPaid => Some(OrderSampleFilter::FullyPaid),
        WebhookEvent::OrderFulfilled => Some(OrderSampleFilter::Fulfilled),
        WebhookEvent::OrderCancelled | WebhookEvent::OrderUpdated => {
            Some(OrderSampleFilter::Canceled)
        }
        _ => None,
    }
}

fn blank_checkout_token(mut payload: Value) -> Value {
    if let Some(item) = payload.get_mut(0) {
        if let Some(map) = item.as_object_mut() {
            map.insert("token".to_string(), json!(Uuid::from_u128(1)));
        }
    }
    payload
}

/// A sample payload for the given event, or `None` when the event has no
/// sample or the store has no matching data.
#[tracing::instrument(skip_all, fields(event = %event))]
pub fn generate_sample_payload(
    event: WebhookEvent,
    source: &dyn SampleDataSource,
    config: &WebhookConfig,
) -> Option<Value> {
    match event {
        WebhookEvent::CustomerCreated | WebhookEvent::CustomerUpdated => {
            Some(generate_customer_payload(&generate_fake_user(), None))
        }
        WebhookEvent::ProductCreated => source
            .sample_product()
            .map(|product| generate_product_payload(&product, config, None)),
        WebhookEvent::CheckoutCreated | WebhookEvent::CheckoutUpdated => {
            source.sample_checkout().map(|checkout| {
                let anonymized = anonymize_checkout(&checkout);
                let warehouse = anonymized
                    .shipping_address
                    .as_ref()
                    .and_then(|address| source.warehouse_for_country(&address.country));
                blank_checkout_token(generate_checkout_payload(
                    &anonymized,
                    warehouse.as_ref(),
                    None,
                ))
            })
        }
        WebhookEvent::PageCreated | WebhookEvent::PageUpdated | WebhookEvent::PageDeleted => {
            source.sample_page().map(|page| generate_page_payload(&page, None))
        }
        WebhookEvent::FulfillmentCreated => {
            source.sample_fulfillment().map(|(fulfillment, order)| {
                let anonymized = anonymize_order(&order);
                let warehouse = anonymized
                    .shipping_address
                    .as_ref()
                    .and_then(|address| source.warehouse_for_country(&address.country));
                generate_fulfillment_payload(
                    &fulfillment,
                    &anonymized,
                    warehouse.as_ref().map(|w| &w.address),
                    None,
                )
            })
        }
        _ => order_filter_for(event).and_then(|filter| {
            source
                .sample_order(filter)
                .map(|order| generate_order_payload(&anonymize_order(&order), None, true))
        }),
    }
}
