//! Order payloads.

use serde_json::{Value, json};

use persimmon_core::{ADDRESS_FIELDS, Currency, Requestor, global_id};

use crate::meta::{generate_meta, generate_requestor};
use crate::serializer::{Projection, project, quantize_price_fields};
use crate::types::{Fulfillment, Order, OrderLine, Payment, ShippingMethod, Warehouse};

pub const ORDER_FIELDS: &[&str] = &[
    "status",
    "origin",
    "shipping_method_name",
    "collection_point_name",
    "shipping_price_net_amount",
    "shipping_price_gross_amount",
    "shipping_tax_rate",
    "weight",
    "language_code",
    "private_metadata",
    "metadata",
    "total_net_amount",
    "total_gross_amount",
    "undiscounted_total_net_amount",
    "undiscounted_total_gross_amount",
];

pub const ORDER_PRICE_FIELDS: &[&str] = &[
    "shipping_price_net_amount",
    "shipping_price_gross_amount",
    "total_net_amount",
    "total_gross_amount",
    "undiscounted_total_net_amount",
    "undiscounted_total_gross_amount",
];

const CHANNEL_FIELDS: &[&str] = &["slug", "currency_code"];

const DISCOUNT_FIELDS: &[&str] = &[
    "type",
    "value_type",
    "value",
    "amount_value",
    "name",
    "translated_name",
    "reason",
];

const FULFILLMENT_FIELDS: &[&str] = &[
    "status",
    "tracking_number",
    "shipping_refund_amount",
    "total_refund_amount",
];

const FULFILLMENT_PRICE_FIELDS: &[&str] = &["shipping_refund_amount", "total_refund_amount"];

const PAYMENT_FIELDS: &[&str] = &[
    "gateway",
    "payment_method_type",
    "cc_brand",
    "is_active",
    "partial",
    "charge_status",
    "psp_reference",
    "total",
    "captured_amount",
    "currency",
    "billing_email",
    "billing_first_name",
    "billing_last_name",
    "billing_company_name",
    "billing_address_1",
    "billing_address_2",
    "billing_city",
    "billing_city_area",
    "billing_postal_code",
    "billing_country_code",
    "billing_country_area",
];

const PAYMENT_PRICE_FIELDS: &[&str] = &["captured_amount", "total"];

fn allocations_payload(line: &OrderLine) -> Value {
    Value::Array(
        line.allocations
            .iter()
            .map(|allocation| {
                json!({
                    "warehouse_id": global_id("Warehouse", allocation.warehouse_id),
                    "quantity_allocated": allocation.quantity_allocated,
                })
            })
            .collect(),
    )
}

/// Order lines as they appear inside order payloads.
#[tracing::instrument(skip_all)]
pub fn generate_order_lines_payload(lines: &[OrderLine]) -> Value {
    const LINE_FIELDS: &[&str] = &[
        "product_name",
        "variant_name",
        "translated_product_name",
        "translated_variant_name",
        "product_sku",
        "quantity",
        "currency",
        "unit_price_net_amount",
        "unit_price_gross_amount",
        "unit_discount_amount",
        "unit_discount_type",
        "unit_discount_reason",
        "total_price_net_amount",
        "total_price_gross_amount",
        "undiscounted_unit_price_net_amount",
        "undiscounted_unit_price_gross_amount",
        "undiscounted_total_price_net_amount",
        "undiscounted_total_price_gross_amount",
        "tax_rate",
        "sale_id",
        "voucher_code",
    ];
    const LINE_PRICE_FIELDS: &[&str] = &[
        "unit_price_gross_amount",
        "unit_price_net_amount",
        "unit_discount_amount",
        "total_price_net_amount",
        "total_price_gross_amount",
        "undiscounted_unit_price_net_amount",
        "undiscounted_unit_price_gross_amount",
        "undiscounted_total_price_net_amount",
        "undiscounted_total_price_gross_amount",
    ];

    let projection = Projection::new(LINE_FIELDS)
        .computed("product_variant_id", |line: &OrderLine| {
            line.variant_id
                .map_or(Value::Null, |id| json!(global_id("ProductVariant", id)))
        })
        .computed("allocations", allocations_payload);

    Value::Array(
        lines
            .iter()
            .map(|line| {
                let mut item = projection.serialize_one(line);
                if let Value::Object(map) = &mut item {
                    quantize_price_fields(map, LINE_PRICE_FIELDS, line.currency);
                }
                item
            })
            .collect(),
    )
}

pub(crate) fn collection_point_payload(warehouse: &Warehouse) -> Value {
    Projection::new(&["name", "email", "click_and_collect_option", "is_private"])
        .related("address", ADDRESS_FIELDS, |w: &Warehouse| Some(&w.address))
        .serialize_one(warehouse)
}

/// `null` when the method is not listed in the order's channel.
pub(crate) fn shipping_method_payload(
    method: &ShippingMethod,
    channel_slug: &str,
) -> Option<Value> {
    let listing = method.listing_for_channel(channel_slug)?;
    let mut item = Projection::new(&["name", "type"]).serialize_one(method);
    if let Value::Object(map) = &mut item {
        map.insert("currency".to_string(), json!(listing.currency));
        map.insert(
            "price_amount".to_string(),
            json!(persimmon_core::quantize_price(
                listing.price_amount,
                listing.currency
            )),
        );
    }
    Some(item)
}

fn order_payments_payload(payments: &[Payment], currency: Currency) -> Value {
    let projection = Projection::new(PAYMENT_FIELDS)
        .computed("created", |p: &Payment| json!(p.created_at))
        .computed("modified", |p: &Payment| json!(p.modified_at));
    Value::Array(
        payments
            .iter()
            .map(|payment| {
                let mut item = projection.serialize_one(payment);
                if let Value::Object(map) = &mut item {
                    quantize_price_fields(map, PAYMENT_PRICE_FIELDS, currency);
                }
                item
            })
            .collect(),
    )
}

fn order_fulfillments_payload(fulfillments: &[Fulfillment], currency: Currency) -> Value {
    let projection = Projection::new(FULFILLMENT_FIELDS)
        .computed("lines", |f: &Fulfillment| {
            crate::payloads::generate_fulfillment_lines_payload(f)
        })
        .computed("created", |f: &Fulfillment| json!(f.created_at));
    Value::Array(
        fulfillments
            .iter()
            .map(|fulfillment| {
                let mut item = projection.serialize_one(fulfillment);
                if let Value::Object(map) = &mut item {
                    quantize_price_fields(map, FULFILLMENT_PRICE_FIELDS, currency);
                }
                item
            })
            .collect(),
    )
}

/// The full order payload: the order row plus lines, fulfillments,
/// payments, discounts, addresses and resolved shipping data.
#[tracing::instrument(skip_all)]
pub fn generate_order_payload(
    order: &Order,
    requestor: Option<&Requestor>,
    with_meta: bool,
) -> Value {
    let discounts = Value::Array(
        order
            .discounts
            .iter()
            .map(|discount| {
                let mut map = project(discount, DISCOUNT_FIELDS);
                quantize_price_fields(&mut map, &["amount_value"], order.currency);
                Value::Object(map)
            })
            .collect(),
    );

    let mut projection = Projection::new(ORDER_FIELDS)
        .computed("token", |o: &Order| json!(o.id))
        .computed("user_email", |o: &Order| json!(o.user_email))
        .computed("created", |o: &Order| json!(o.created_at))
        .computed("original", |o: &Order| {
            o.original_id
                .map_or(Value::Null, |id| json!(global_id("Order", id)))
        })
        .related("channel", CHANNEL_FIELDS, |o: &Order| Some(&o.channel))
        .related("shipping_address", ADDRESS_FIELDS, |o: &Order| {
            o.shipping_address.as_ref()
        })
        .related("billing_address", ADDRESS_FIELDS, |o: &Order| {
            o.billing_address.as_ref()
        })
        .constant("discounts", discounts)
        .constant("lines", generate_order_lines_payload(&order.lines))
        .constant(
            "fulfillments",
            order_fulfillments_payload(&order.fulfillments, order.currency),
        )
        .constant(
            "payments",
            order_payments_payload(&order.payments, order.currency),
        )
        .constant(
            "collection_point",
            order
                .collection_point
                .as_ref()
                .map_or(Value::Null, collection_point_payload),
        )
        .constant(
            "shipping_method",
            order
                .shipping_method
                .as_ref()
                .and_then(|method| shipping_method_payload(method, &order.channel.slug))
                .unwrap_or(Value::Null),
        );
    if with_meta {
        projection = projection.constant("meta", generate_meta(generate_requestor(requestor)));
    }

    let mut item = projection.serialize_one(order);
    if let Value::Object(map) = &mut item {
        quantize_price_fields(map, ORDER_PRICE_FIELDS, order.currency);
    }
    Value::Array(vec![item])
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use persimmon_core::{
        Address, ChannelId, DiscountValueType, Metadata, OrderOrigin, OrderStatus,
        ShippingMethodId, VariantId, WarehouseId,
    };

    use super::*;
    use crate::types::{Allocation, Channel, OrderDiscount, ShippingMethodChannelListing};

    fn address() -> Address {
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

    fn line() -> OrderLine {
        OrderLine {
            id: 11,
            product_name: "Teapot".to_string(),
            variant_name: "Blue".to_string(),
            translated_product_name: String::new(),
            translated_variant_name: String::new(),
            product_sku: Some("TP-1".to_string()),
            variant_id: Some(VariantId::from(3)),
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
            allocations: vec![Allocation {
                warehouse_id: WarehouseId::from(7),
                quantity_allocated: 2,
            }],
            variant_weight_grams: Some(dec!(450)),
            product_type: Some("Kitchenware".to_string()),
        }
    }

    fn order() -> Order {
        Order {
            id: Uuid::from_u128(0xfeed),
            status: OrderStatus::Unfulfilled,
            origin: OrderOrigin::Checkout,
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
            user_email: "nora@example.net".to_string(),
            language_code: "en".to_string(),
            currency: Currency::USD,
            original_id: None,
            channel: Channel {
                id: ChannelId::from(1),
                slug: "webshop".to_string(),
                currency_code: Currency::USD,
            },
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
            lines: vec![line()],
            fulfillments: Vec::new(),
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
            billing_address: None,
            shipping_method: Some(ShippingMethod {
                id: ShippingMethodId::from(4),
                name: "Standard".to_string(),
                method_type: crate::types::ShippingMethodType::Price,
                channel_listings: vec![ShippingMethodChannelListing {
                    channel_slug: "webshop".to_string(),
                    currency: Currency::USD,
                    price_amount: dec!(5),
                }],
            }),
            collection_point: None,
        }
    }

    #[test]
    fn order_payload_is_a_one_item_array() {
        let payload = generate_order_payload(&order(), None, true);
        let items = payload.as_array().unwrap();
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item["type"], json!("Order"));
        assert_eq!(item["id"], json!(global_id("Order", Uuid::from_u128(0xfeed))));
        assert_eq!(item["token"], json!(Uuid::from_u128(0xfeed)));
        assert_eq!(item["status"], json!("unfulfilled"));
        // money comes out quantized to strings
        assert_eq!(item["total_gross_amount"], json!("31.25"));
        assert_eq!(item["shipping_price_net_amount"], json!("5.00"));
        assert_eq!(item["meta"]["issuing_principal"], json!({"id": null, "type": null}));
    }

    #[test]
    fn order_relations_project_allowlisted_fields() {
        let payload = generate_order_payload(&order(), None, false);
        let item = &payload[0];

        assert_eq!(item["channel"], json!({"slug": "webshop", "currency_code": "USD"}));
        assert_eq!(item["shipping_address"]["city"], json!("Stockholm"));
        assert_eq!(item["billing_address"], Value::Null);
        assert_eq!(item["original"], Value::Null);
        assert!(item.get("meta").is_none());

        let discount = &item["discounts"][0];
        assert_eq!(discount["type"], json!("manual"));
        assert_eq!(discount["amount_value"], json!("1.00"));

        let method = &item["shipping_method"];
        assert_eq!(method["name"], json!("Standard"));
        assert_eq!(method["price_amount"], json!("5.00"));
        assert_eq!(method["currency"], json!("USD"));
    }

    #[test]
    fn line_payload_carries_global_ids_and_allocations() {
        let payload = generate_order_lines_payload(&[line()]);
        let item = &payload[0];

        assert_eq!(item["type"], json!("OrderLine"));
        assert_eq!(item["id"], json!(global_id("OrderLine", 11)));
        assert_eq!(
            item["product_variant_id"],
            json!(global_id("ProductVariant", 3))
        );
        assert_eq!(item["unit_price_gross_amount"], json!("12.50"));
        assert_eq!(
            item["allocations"][0]["warehouse_id"],
            json!(global_id("Warehouse", 7))
        );
    }

    #[test]
    fn shipping_method_outside_channel_is_null() {
        let mut order = order();
        order.channel.slug = "other-channel".to_string();
        let payload = generate_order_payload(&order, None, false);
        assert_eq!(payload[0]["shipping_method"], Value::Null);
    }
}
