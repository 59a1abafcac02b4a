//! Webhook event names.

use serde::{Deserialize, Serialize};

/// Asynchronous webhook events a subscriber can listen for.
///
/// The serde names are the wire names apps use when registering webhooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    OrderCreated,
    OrderConfirmed,
    OrderFullyPaid,
    OrderUpdated,
    OrderCancelled,
    OrderFulfilled,
    DraftOrderCreated,
    DraftOrderUpdated,
    DraftOrderDeleted,
    SaleCreated,
    SaleUpdated,
    SaleDeleted,
    InvoiceRequested,
    InvoiceDeleted,
    InvoiceSent,
    CustomerCreated,
    CustomerUpdated,
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    ProductVariantCreated,
    ProductVariantUpdated,
    ProductVariantDeleted,
    ProductVariantOutOfStock,
    ProductVariantBackInStock,
    CheckoutCreated,
    CheckoutUpdated,
    FulfillmentCreated,
    FulfillmentCanceled,
    PageCreated,
    PageUpdated,
    PageDeleted,
    CollectionCreated,
    CollectionUpdated,
    CollectionDeleted,
    TranslationCreated,
    TranslationUpdated,
    TransactionActionRequest,
}

impl WebhookEvent {
    /// Wire name of the event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OrderCreated => "order_created",
            Self::OrderConfirmed => "order_confirmed",
            Self::OrderFullyPaid => "order_fully_paid",
            Self::OrderUpdated => "order_updated",
            Self::OrderCancelled => "order_cancelled",
            Self::OrderFulfilled => "order_fulfilled",
            Self::DraftOrderCreated => "draft_order_created",
            Self::DraftOrderUpdated => "draft_order_updated",
            Self::DraftOrderDeleted => "draft_order_deleted",
            Self::SaleCreated => "sale_created",
            Self::SaleUpdated => "sale_updated",
            Self::SaleDeleted => "sale_deleted",
            Self::InvoiceRequested => "invoice_requested",
            Self::InvoiceDeleted => "invoice_deleted",
            Self::InvoiceSent => "invoice_sent",
            Self::CustomerCreated => "customer_created",
            Self::CustomerUpdated => "customer_updated",
            Self::ProductCreated => "product_created",
            Self::ProductUpdated => "product_updated",
            Self::ProductDeleted => "product_deleted",
            Self::ProductVariantCreated => "product_variant_created",
            Self::ProductVariantUpdated => "product_variant_updated",
            Self::ProductVariantDeleted => "product_variant_deleted",
            Self::ProductVariantOutOfStock => "product_variant_out_of_stock",
            Self::ProductVariantBackInStock => "product_variant_back_in_stock",
            Self::CheckoutCreated => "checkout_created",
            Self::CheckoutUpdated => "checkout_updated",
            Self::FulfillmentCreated => "fulfillment_created",
            Self::FulfillmentCanceled => "fulfillment_canceled",
            Self::PageCreated => "page_created",
            Self::PageUpdated => "page_updated",
            Self::PageDeleted => "page_deleted",
            Self::CollectionCreated => "collection_created",
            Self::CollectionUpdated => "collection_updated",
            Self::CollectionDeleted => "collection_deleted",
            Self::TranslationCreated => "translation_created",
            Self::TranslationUpdated => "translation_updated",
            Self::TransactionActionRequest => "transaction_action_request",
        }
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
