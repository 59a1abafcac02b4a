//! Persimmon Webhooks - payload serialization and event-payload generation.
//!
//! Converts domain snapshots (orders, checkouts, products, customers,
//! fulfillments, payments, translations, ...) into the versioned JSON
//! documents delivered to webhook subscribers. The wire format is a
//! contract: field names, quantized money strings and the `meta` envelope
//! are what third-party integrations parse.
//!
//! # Structure
//!
//! - [`serializer`] - declarative field projection over serde
//! - [`meta`] - the `{issued_at, version, issuing_principal}` envelope
//! - [`types`] - domain snapshot structs the builders read
//! - [`payloads`] - one builder per entity/event family
//! - [`events`] - webhook event names
//! - [`sample`] / [`anonymize`] - sample payloads for the dashboard's
//!   "test webhook" flow, with personal data blanked out
//!
//! Delivery, signing and retries are not this crate's concern; it stops at
//! the JSON document.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod anonymize;
pub mod config;
pub mod events;
pub mod meta;
pub mod payloads;
pub mod sample;
pub mod serializer;
pub mod types;

pub use config::{ConfigError, WebhookConfig, build_absolute_uri};
pub use events::WebhookEvent;
pub use meta::{PAYLOAD_VERSION, generate_meta, generate_requestor};
pub use sample::{OrderSampleFilter, SampleDataSource, generate_sample_payload};
pub use serializer::{PayloadEntity, Projection, project, quantize_price_fields};
