//! Order snapshots: the order row with its lines, fulfillments, payments
//! and discounts attached.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use persimmon_core::{
    Address, ChannelId, Currency, DiscountValueType, InvoiceId, Metadata, OrderOrigin,
    OrderStatus, SaleId, VariantId, WarehouseId,
};

use crate::serializer::PayloadEntity;
use crate::types::fulfillment::Fulfillment;
use crate::types::payment::Payment;
use crate::types::shipping::ShippingMethod;
use crate::types::warehouse::Warehouse;

/// A sales channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub slug: String,
    pub currency_code: Currency,
}

/// A discount applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDiscount {
    /// Discount source: `"voucher"`, `"manual"`, ...
    #[serde(rename = "type")]
    pub discount_type: String,
    pub value_type: DiscountValueType,
    /// The configured value (amount or percentage, per `value_type`).
    pub value: Decimal,
    /// The resolved amount taken off the order, in the order currency.
    pub amount_value: Decimal,
    pub name: Option<String>,
    pub translated_name: Option<String>,
    pub reason: Option<String>,
}

/// Stock allocated to an order line, per warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub warehouse_id: WarehouseId,
    pub quantity_allocated: i32,
}

/// A line on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i32,
    pub product_name: String,
    pub variant_name: String,
    pub translated_product_name: String,
    pub translated_variant_name: String,
    pub product_sku: Option<String>,
    pub variant_id: Option<VariantId>,
    pub quantity: i32,
    pub currency: Currency,
    pub unit_price_net_amount: Decimal,
    pub unit_price_gross_amount: Decimal,
    pub unit_discount_amount: Decimal,
    pub unit_discount_type: DiscountValueType,
    pub unit_discount_reason: Option<String>,
    pub total_price_net_amount: Decimal,
    pub total_price_gross_amount: Decimal,
    pub undiscounted_unit_price_net_amount: Decimal,
    pub undiscounted_unit_price_gross_amount: Decimal,
    pub undiscounted_total_price_net_amount: Decimal,
    pub undiscounted_total_price_gross_amount: Decimal,
    pub tax_rate: Decimal,
    /// Global ID of the sale that discounted this line, if any.
    pub sale_id: Option<String>,
    pub voucher_code: Option<String>,
    pub allocations: Vec<Allocation>,
    /// Variant weight in grams, used by fulfillment line payloads.
    pub variant_weight_grams: Option<Decimal>,
    /// Product type name, used by fulfillment line payloads.
    pub product_type: Option<String>,
}

impl PayloadEntity for OrderLine {
    const OBJECT_TYPE: &'static str = "OrderLine";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// An order with every relation the wire format projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub status: OrderStatus,
    pub origin: OrderOrigin,
    pub created_at: DateTime<Utc>,
    pub user_email: String,
    pub language_code: String,
    pub currency: Currency,
    /// The order this one reissues, if any.
    pub original_id: Option<Uuid>,
    pub channel: Channel,
    pub shipping_method_name: Option<String>,
    pub collection_point_name: Option<String>,
    pub shipping_price_net_amount: Decimal,
    pub shipping_price_gross_amount: Decimal,
    pub shipping_tax_rate: Decimal,
    /// Order weight in grams.
    pub weight: Decimal,
    pub total_net_amount: Decimal,
    pub total_gross_amount: Decimal,
    pub undiscounted_total_net_amount: Decimal,
    pub undiscounted_total_gross_amount: Decimal,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
    pub lines: Vec<OrderLine>,
    pub fulfillments: Vec<Fulfillment>,
    pub payments: Vec<Payment>,
    pub discounts: Vec<OrderDiscount>,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
    pub shipping_method: Option<ShippingMethod>,
    pub collection_point: Option<Warehouse>,
}

impl PayloadEntity for Order {
    const OBJECT_TYPE: &'static str = "Order";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// An invoice generated for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: Option<String>,
    pub external_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub order: Option<Order>,
}

impl PayloadEntity for Invoice {
    const OBJECT_TYPE: &'static str = "Invoice";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// A sale (catalogue-wide discount).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
}

impl PayloadEntity for Sale {
    const OBJECT_TYPE: &'static str = "Sale";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// The catalogue a sale applies to, as sets of global IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleCatalogue {
    pub categories: BTreeSet<String>,
    pub collections: BTreeSet<String>,
    pub products: BTreeSet<String>,
    pub variants: BTreeSet<String>,
}
