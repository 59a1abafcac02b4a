//! Product catalogue snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use persimmon_core::{
    AttributeId, CategoryId, CollectionId, Currency, Metadata, ProductId, ProductMediaType,
    VariantId, WarehouseId,
};

use crate::serializer::PayloadEntity;

/// A value assigned to an attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValue {
    pub name: String,
    pub slug: String,
    pub value: String,
}

/// An attribute with the values assigned to a product or variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
    pub slug: String,
    /// Input widget kind: `"dropdown"`, `"multiselect"`, `"file"`, ...
    pub input_type: String,
    pub values: Vec<AttributeValue>,
}

/// Media attached to a product or variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMedia {
    pub alt: String,
    #[serde(rename = "type")]
    pub media_type: ProductMediaType,
    /// Storage path for images, relative to the site base URL.
    pub image_path: Option<String>,
    /// Source URL for externally hosted media (videos).
    pub external_url: Option<String>,
}

/// Channel-specific publication state of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductChannelListing {
    pub channel_slug: String,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub visible_in_listings: bool,
    pub available_for_purchase_at: Option<DateTime<Utc>>,
}

impl PayloadEntity for ProductChannelListing {
    const OBJECT_TYPE: &'static str = "ProductChannelListing";

    fn object_id(&self) -> String {
        self.channel_slug.clone()
    }
}

/// Channel-specific pricing of a variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantChannelListing {
    pub channel_slug: String,
    pub currency: Currency,
    pub price_amount: Option<Decimal>,
    pub cost_price_amount: Option<Decimal>,
}

impl PayloadEntity for VariantChannelListing {
    const OBJECT_TYPE: &'static str = "ProductVariantChannelListing";

    fn object_id(&self) -> String {
        self.channel_slug.clone()
    }
}

/// A product variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: VariantId,
    pub product_id: ProductId,
    pub sku: Option<String>,
    pub name: String,
    pub track_inventory: bool,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
    pub attributes: Vec<Attribute>,
    pub media: Vec<ProductMedia>,
    pub channel_listings: Vec<VariantChannelListing>,
}

impl PayloadEntity for ProductVariant {
    const OBJECT_TYPE: &'static str = "ProductVariant";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// A curated product collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Storage path of the background image, relative to the site base URL.
    pub background_image_path: Option<String>,
    pub background_image_alt: String,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
}

impl PayloadEntity for Collection {
    const OBJECT_TYPE: &'static str = "Collection";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// A product with its catalogue relations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    /// Rich-text description, serialized as a JSON string by the editor.
    pub description: Option<String>,
    pub currency: Currency,
    pub updated_at: DateTime<Utc>,
    pub charge_taxes: bool,
    /// Product weight in grams.
    pub weight: Option<Decimal>,
    pub publication_date: Option<chrono::NaiveDate>,
    pub is_published: bool,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
    pub category: Option<Category>,
    pub collections: Vec<Collection>,
    pub attributes: Vec<Attribute>,
    pub media: Vec<ProductMedia>,
    pub channel_listings: Vec<ProductChannelListing>,
    pub variants: Vec<ProductVariant>,
}

impl PayloadEntity for Product {
    const OBJECT_TYPE: &'static str = "Product";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// Stock of a variant in one warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub id: i32,
    pub warehouse_id: WarehouseId,
    pub variant_id: VariantId,
    pub product_id: ProductId,
    pub product_slug: String,
    pub quantity: i32,
}

impl PayloadEntity for Stock {
    const OBJECT_TYPE: &'static str = "Stock";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}
