//! Integration tests for Persimmon.
//!
//! The crate body holds shared fixtures; the scenarios live under
//! `tests/`:
//!
//! - `webhook_payloads` - full payload documents across the builders
//! - `app_authorization` - permission gating and token issuance
//!
//! Run with: `cargo test -p persimmon-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use persimmon_apps::{App, AppToken, AppTokenId};
use persimmon_core::{
    Address, AppId, AppType, ChannelId, Currency, DiscountValueType, FulfillmentId,
    FulfillmentStatus, Metadata, OrderOrigin, OrderStatus, Permission, ShippingMethodId, UserId,
    VariantId, WarehouseId,
};
use persimmon_webhooks::types::{
    Channel, Checkout, CheckoutLine, Fulfillment, FulfillmentLine, Order, OrderDiscount,
    OrderLine, ShippingMethod, ShippingMethodChannelListing, ShippingMethodType,
};

#[must_use]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

#[must_use]
pub fn address() -> Address {
    Address {
        first_name: "Nora".to_string(),
        last_name: "Berg".to_string(),
        company_name: String::new(),
        street_address_1: "Storgatan 1".to_string(),
        street_address_2: String::new(),
        city: "Stockholm".to_string(),
        city_area: String::new(),
        postal_code: "111 22".to_string(),
        country: "SE".to_string(),
        country_area: String::new(),
        phone: "+46700000000".to_string(),
    }
}

#[must_use]
pub fn channel() -> Channel {
    Channel {
        id: ChannelId::new(1),
        slug: "webshop".to_string(),
        currency_code: Currency::USD,
    }
}

#[must_use]
pub fn order_line() -> OrderLine {
    OrderLine {
        id: 11,
        product_name: "Teapot".to_string(),
        variant_name: "Blue".to_string(),
        translated_product_name: String::new(),
        translated_variant_name: String::new(),
        product_sku: Some("TP-1".to_string()),
        variant_id: Some(VariantId::new(3)),
        quantity: 2,
        currency: Currency::USD,
        unit_price_net_amount: dec!(10),
        unit_price_gross_amount: dec!(12.5),
        unit_discount_amount: dec!(0),
        unit_discount_type: DiscountValueType::Fixed,
        unit_discount_reason: None,
        total_price_net_amount: dec!(20),
        total_price_gross_amount: dec!(25),
        undiscounted_unit_price_net_amount: dec!(10),
        undiscounted_unit_price_gross_amount: dec!(12.5),
        undiscounted_total_price_net_amount: dec!(20),
        undiscounted_total_price_gross_amount: dec!(25),
        tax_rate: dec!(0.25),
        sale_id: None,
        voucher_code: None,
        allocations: Vec::new(),
        variant_weight_grams: Some(dec!(450)),
        product_type: Some("Kitchenware".to_string()),
    }
}

#[must_use]
pub fn fulfillment() -> Fulfillment {
    Fulfillment {
        id: FulfillmentId::new(5),
        status: FulfillmentStatus::Fulfilled,
        tracking_number: "TRACK-9".to_string(),
        created_at: fixed_time(),
        shipping_refund_amount: None,
        total_refund_amount: None,
        lines: vec![FulfillmentLine {
            id: 31,
            quantity: 2,
            order_line: order_line(),
            warehouse_id: Some(WarehouseId::new(7)),
        }],
    }
}

#[must_use]
pub fn shipping_method() -> ShippingMethod {
    ShippingMethod {
        id: ShippingMethodId::new(4),
        name: "Standard".to_string(),
        method_type: ShippingMethodType::Price,
        channel_listings: vec![ShippingMethodChannelListing {
            channel_slug: "webshop".to_string(),
            currency: Currency::USD,
            price_amount: dec!(5),
        }],
    }
}

#[must_use]
pub fn order() -> Order {
    Order {
        id: Uuid::from_u128(0xfeed),
        status: OrderStatus::Unfulfilled,
        origin: OrderOrigin::Checkout,
        created_at: fixed_time(),
        user_email: "nora@example.net".to_string(),
        language_code: "en".to_string(),
        currency: Currency::USD,
        original_id: None,
        channel: channel(),
        shipping_method_name: Some("Standard".to_string()),
        collection_point_name: None,
        shipping_price_net_amount: dec!(5),
        shipping_price_gross_amount: dec!(6.25),
        shipping_tax_rate: dec!(0.25),
        weight: dec!(900),
        total_net_amount: dec!(25),
        total_gross_amount: dec!(31.25),
        undiscounted_total_net_amount: dec!(25),
        undiscounted_total_gross_amount: dec!(31.25),
        metadata: Metadata::new(),
        private_metadata: Metadata::new(),
        lines: vec![order_line()],
        fulfillments: vec![fulfillment()],
        payments: Vec::new(),
        discounts: vec![OrderDiscount {
            discount_type: "manual".to_string(),
            value_type: DiscountValueType::Fixed,
            value: dec!(1),
            amount_value: dec!(1),
            name: Some("Loyalty".to_string()),
            translated_name: None,
            reason: None,
        }],
        shipping_address: Some(address()),
        billing_address: Some(address()),
        shipping_method: Some(shipping_method()),
        collection_point: None,
    }
}

#[must_use]
pub fn checkout() -> Checkout {
    Checkout {
        token: Uuid::from_u128(0x77),
        created_at: fixed_time(),
        last_change: fixed_time(),
        email: "shopper@example.net".to_string(),
        quantity: 1,
        currency: Currency::USD,
        discount_amount: dec!(2.5),
        discount_name: Some("WELCOME".to_string()),
        language_code: "en".to_string(),
        metadata: Metadata::new(),
        private_metadata: Metadata::new(),
        channel: channel(),
        user: None,
        billing_address: None,
        shipping_address: Some(address()),
        shipping_method: Some(shipping_method()),
        collection_point: None,
        lines: vec![CheckoutLine {
            id: 1,
            variant_id: VariantId::new(5),
            sku: Some("MUG-1".to_string()),
            quantity: 1,
            base_price: dec!(7.5),
            currency: Currency::USD,
            product_name: "Mug".to_string(),
            variant_name: "White".to_string(),
        }],
    }
}

#[must_use]
pub fn third_party_app() -> App {
    App {
        id: AppId::new(11),
        name: "inventory-sync".to_string(),
        created_at: fixed_time(),
        is_active: true,
        app_type: AppType::Thirdparty,
        about: None,
        data_privacy_url: None,
        homepage_url: None,
        support_url: None,
        app_url: Some("https://app.example.com/dashboard".to_string()),
        manifest_url: Some("https://app.example.com/manifest.json".to_string()),
        version: Some("2.1.0".to_string()),
        permissions: vec![Permission::ManageProducts, Permission::ManageOrders],
        metadata: [("public_key", "pk_123")].into_iter().collect(),
        private_metadata: Metadata::new(),
        tokens: vec![AppToken {
            id: AppTokenId::new(1),
            name: "default".to_string(),
            token_last_4: "b3x9".to_string(),
        }],
        webhooks: vec![],
        extensions: vec![],
    }
}

#[must_use]
pub fn staff_user(permissions: Vec<Permission>) -> persimmon_core::Requestor {
    persimmon_core::Requestor::User {
        id: UserId::new(1),
        email: "staff@example.com".to_string(),
        permissions,
    }
}
