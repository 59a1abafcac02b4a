//! Shipping method snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use persimmon_core::{Currency, Money, ShippingMethodId};

use crate::serializer::PayloadEntity;

/// How a shipping method's applicability is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethodType {
    #[default]
    Price,
    Weight,
}

/// Channel-specific pricing of a shipping method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethodChannelListing {
    pub channel_slug: String,
    pub currency: Currency,
    pub price_amount: Decimal,
}

/// A configured shipping method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: ShippingMethodId,
    pub name: String,
    #[serde(rename = "type")]
    pub method_type: ShippingMethodType,
    pub channel_listings: Vec<ShippingMethodChannelListing>,
}

impl ShippingMethod {
    /// The listing for a given channel, if the method is available there.
    #[must_use]
    pub fn listing_for_channel(&self, channel_slug: &str) -> Option<&ShippingMethodChannelListing> {
        self.channel_listings
            .iter()
            .find(|listing| listing.channel_slug == channel_slug)
    }
}

impl PayloadEntity for ShippingMethod {
    const OBJECT_TYPE: &'static str = "ShippingMethod";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// A shipping option as presented to shipping-method filtering webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethodData {
    /// Global ID of the method.
    pub graphql_id: String,
    pub name: String,
    pub price: Money,
    pub maximum_order_weight: Option<Decimal>,
    pub minimum_order_weight: Option<Decimal>,
    pub maximum_delivery_days: Option<i32>,
    pub minimum_delivery_days: Option<i32>,
}
