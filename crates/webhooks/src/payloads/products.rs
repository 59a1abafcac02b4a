//! Product catalogue payloads.

use serde_json::{Value, json};

use persimmon_core::{ProductMediaType, Requestor, VariantId, global_id};

use crate::config::{WebhookConfig, build_absolute_uri};
use crate::meta::{generate_meta, generate_requestor};
use crate::serializer::Projection;
use crate::types::{
    Attribute, Collection, Product, ProductChannelListing, ProductMedia, ProductVariant, Stock,
    VariantChannelListing,
};

pub const PRODUCT_FIELDS: &[&str] = &[
    "name",
    "description",
    "currency",
    "updated_at",
    "charge_taxes",
    "weight",
    "publication_date",
    "is_published",
    "private_metadata",
    "metadata",
];

pub const PRODUCT_VARIANT_FIELDS: &[&str] =
    &["sku", "name", "track_inventory", "private_metadata", "metadata"];

/// Attributes with their assigned values, keyed by global attribute ID.
#[must_use]
pub fn serialize_attributes(attributes: &[Attribute]) -> Value {
    Value::Array(
        attributes
            .iter()
            .map(|attribute| {
                json!({
                    "name": attribute.name,
                    "input_type": attribute.input_type,
                    "slug": attribute.slug,
                    "id": global_id("Attribute", attribute.id),
                    "values": attribute
                        .values
                        .iter()
                        .map(|value| {
                            json!({
                                "name": value.name,
                                "slug": value.slug,
                                "value": value.value,
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

fn media_url(media: &ProductMedia, config: &WebhookConfig) -> Value {
    match media.media_type {
        ProductMediaType::Image => media
            .image_path
            .as_deref()
            .map_or(Value::Null, |path| json!(build_absolute_uri(config, path))),
        ProductMediaType::Video => media
            .external_url
            .as_deref()
            .map_or(Value::Null, |url| json!(url)),
    }
}

fn media_payload(media: &[ProductMedia], config: &WebhookConfig) -> Value {
    Value::Array(
        media
            .iter()
            .map(|item| json!({"alt": item.alt, "url": media_url(item, config)}))
            .collect(),
    )
}

/// Channel listings of a product, with deprecated date aliases kept for
/// subscribers still reading the pre-rename fields.
#[tracing::instrument(skip_all)]
pub fn serialize_product_channel_listing_payload(listings: &[ProductChannelListing]) -> Value {
    const FIELDS: &[&str] = &[
        "published_at",
        "is_published",
        "visible_in_listings",
        "available_for_purchase_at",
    ];
    Projection::new(FIELDS)
        .computed("channel_slug", |l: &ProductChannelListing| {
            json!(l.channel_slug)
        })
        .computed("publication_date", |l: &ProductChannelListing| {
            json!(l.published_at)
        })
        .computed("available_for_purchase", |l: &ProductChannelListing| {
            json!(l.available_for_purchase_at)
        })
        .serialize(listings)
}

#[tracing::instrument(skip_all)]
pub fn generate_product_variant_listings_payload(listings: &[VariantChannelListing]) -> Value {
    Projection::new(&["currency", "price_amount", "cost_price_amount"])
        .computed("channel_slug", |l: &VariantChannelListing| {
            json!(l.channel_slug)
        })
        .serialize(listings)
}

/// Product variants, with attributes, media and channel listings inlined.
#[tracing::instrument(skip_all)]
pub fn generate_product_variant_payload(
    variants: &[ProductVariant],
    config: &WebhookConfig,
    requestor: Option<&Requestor>,
    with_meta: bool,
) -> Value {
    let mut projection = Projection::new(PRODUCT_VARIANT_FIELDS)
        .computed("attributes", |v: &ProductVariant| {
            serialize_attributes(&v.attributes)
        })
        .computed("product_id", |v: &ProductVariant| {
            json!(global_id("Product", v.product_id))
        })
        .computed("media", |v: &ProductVariant| media_payload(&v.media, config))
        .computed("channel_listings", |v: &ProductVariant| {
            generate_product_variant_listings_payload(&v.channel_listings)
        });
    if with_meta {
        projection = projection.constant("meta", generate_meta(generate_requestor(requestor)));
    }
    projection.serialize(variants)
}

/// The full product payload with category, collections, attributes,
/// media, channel listings and variants.
#[tracing::instrument(skip_all)]
pub fn generate_product_payload(
    product: &Product,
    config: &WebhookConfig,
    requestor: Option<&Requestor>,
) -> Value {
    let projection = Projection::new(PRODUCT_FIELDS)
        .related("category", &["name", "slug"], |p: &Product| {
            p.category.as_ref()
        })
        .related_many("collections", &["name", "slug"], |p: &Product| {
            p.collections.as_slice()
        })
        .constant("meta", generate_meta(generate_requestor(requestor)))
        .computed("attributes", |p: &Product| {
            serialize_attributes(&p.attributes)
        })
        .computed("media", |p: &Product| media_payload(&p.media, config))
        .computed("channel_listings", |p: &Product| {
            serialize_product_channel_listing_payload(&p.channel_listings)
        })
        .computed("variants", |p: &Product| {
            generate_product_variant_payload(&p.variants, config, None, false)
        });
    Value::Array(vec![projection.serialize_one(product)])
}

/// The payload for a deleted product: the last product row plus the
/// global IDs of the variants removed with it.
#[tracing::instrument(skip_all)]
pub fn generate_product_deleted_payload(
    product: &Product,
    variant_ids: &[VariantId],
    requestor: Option<&Requestor>,
) -> Value {
    let variant_global_ids: Vec<String> = variant_ids
        .iter()
        .map(|id| global_id("ProductVariant", id))
        .collect();
    let projection = Projection::new(PRODUCT_FIELDS)
        .constant("meta", generate_meta(generate_requestor(requestor)))
        .constant("variants", json!(variant_global_ids));
    Value::Array(vec![projection.serialize_one(product)])
}

/// Stock rows for variants that went out of stock or came back, flattened
/// to global IDs.
#[tracing::instrument(skip_all)]
pub fn generate_product_variant_with_stock_payload(
    stocks: &[Stock],
    requestor: Option<&Requestor>,
) -> Value {
    Projection::new(&[])
        .computed("product_id", |s: &Stock| {
            json!(global_id("Product", s.product_id))
        })
        .computed("product_variant_id", |s: &Stock| {
            json!(global_id("ProductVariant", s.variant_id))
        })
        .computed("warehouse_id", |s: &Stock| {
            json!(global_id("Warehouse", s.warehouse_id))
        })
        .computed("product_slug", |s: &Stock| json!(s.product_slug))
        .constant("meta", generate_meta(generate_requestor(requestor)))
        .serialize(stocks)
}

/// Total quantity held across warehouses.
#[must_use]
pub fn generate_product_variant_stocks_payload(stocks: &[Stock]) -> i64 {
    stocks.iter().map(|stock| i64::from(stock.quantity)).sum()
}

/// The collection payload, with the background image resolved to an
/// absolute URL.
#[tracing::instrument(skip_all)]
pub fn generate_collection_payload(
    collection: &Collection,
    config: &WebhookConfig,
    requestor: Option<&Requestor>,
) -> Value {
    const COLLECTION_FIELDS: &[&str] = &[
        "name",
        "description",
        "background_image_alt",
        "private_metadata",
        "metadata",
    ];
    let projection = Projection::new(COLLECTION_FIELDS)
        .constant(
            "background_image",
            collection
                .background_image_path
                .as_deref()
                .map_or(Value::Null, |path| json!(build_absolute_uri(config, path))),
        )
        .constant("meta", generate_meta(generate_requestor(requestor)));
    Value::Array(vec![projection.serialize_one(collection)])
}
