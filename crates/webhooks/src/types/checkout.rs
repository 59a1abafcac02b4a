//! Checkout snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use persimmon_core::{Address, Currency, Metadata, VariantId};

use crate::serializer::PayloadEntity;
use crate::types::customer::Customer;
use crate::types::order::Channel;
use crate::types::shipping::ShippingMethod;
use crate::types::warehouse::Warehouse;

/// A line in a checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutLine {
    pub id: i32,
    pub variant_id: VariantId,
    pub sku: Option<String>,
    pub quantity: i32,
    /// Undiscounted unit price in the checkout currency.
    pub base_price: Decimal,
    pub currency: Currency,
    pub product_name: String,
    pub variant_name: String,
}

impl CheckoutLine {
    /// `"{product_name} ({variant_name})"`, or just the product name for
    /// single-variant products.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.variant_name.is_empty() {
            self.product_name.clone()
        } else {
            format!("{} ({})", self.product_name, self.variant_name)
        }
    }
}

/// A checkout (cart) with the relations the wire format projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkout {
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_change: DateTime<Utc>,
    pub email: String,
    pub quantity: i32,
    pub currency: Currency,
    pub discount_amount: Decimal,
    pub discount_name: Option<String>,
    pub language_code: String,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
    pub channel: Channel,
    pub user: Option<Customer>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub shipping_method: Option<ShippingMethod>,
    pub collection_point: Option<Warehouse>,
    pub lines: Vec<CheckoutLine>,
}

impl PayloadEntity for Checkout {
    const OBJECT_TYPE: &'static str = "Checkout";

    fn object_id(&self) -> String {
        self.token.to_string()
    }
}
