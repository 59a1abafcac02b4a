//! Domain snapshots the payload builders read.
//!
//! These structs are read-only projections of rows owned by the
//! platform's data layer: they carry exactly the fields and relations the
//! webhook wire format needs, already joined (an `Order` arrives with its
//! lines, fulfillments, payments and discounts attached).

pub mod checkout;
pub mod customer;
pub mod fulfillment;
pub mod order;
pub mod page;
pub mod payment;
pub mod product;
pub mod shipping;
pub mod transaction;
pub mod translation;
pub mod warehouse;

pub use checkout::{Checkout, CheckoutLine};
pub use customer::Customer;
pub use fulfillment::{Fulfillment, FulfillmentLine};
pub use order::{Allocation, Channel, Invoice, Order, OrderDiscount, OrderLine, Sale, SaleCatalogue};
pub use page::Page;
pub use payment::{Payment, PaymentAppData, PaymentData, from_payment_app_id};
pub use product::{
    Attribute, AttributeValue, Category, Collection, Product, ProductChannelListing, ProductMedia,
    ProductVariant, Stock, VariantChannelListing,
};
pub use shipping::{ShippingMethod, ShippingMethodChannelListing, ShippingMethodData, ShippingMethodType};
pub use transaction::{TransactionActionData, TransactionItem};
pub use translation::{Translation, TranslationContext};
pub use warehouse::Warehouse;
