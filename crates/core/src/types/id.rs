//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Relay-style global
//! IDs (the opaque node IDs exposed to webhook subscribers and API clients)
//! are built with [`global_id`] and decoded with [`parse_global_id`].

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use persimmon_core::define_id;
/// define_id!(UserId);
/// define_id!(ProductId);
///
/// let user_id = UserId::new(1);
/// let product_id = ProductId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(AppId);
define_id!(AttributeId);
define_id!(CategoryId);
define_id!(ChannelId);
define_id!(CollectionId);
define_id!(FulfillmentId);
define_id!(InvoiceId);
define_id!(PageId);
define_id!(PageTypeId);
define_id!(PaymentId);
define_id!(ProductId);
define_id!(SaleId);
define_id!(ShippingMethodId);
define_id!(UserId);
define_id!(VariantId);
define_id!(WarehouseId);

/// Error returned when a global ID cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlobalIdError {
    /// The ID is not valid base64.
    #[error("invalid base64 in global ID: {0}")]
    InvalidEncoding(String),
    /// The decoded ID is not of the `Type:pk` form.
    #[error("malformed global ID: {0}")]
    Malformed(String),
    /// The decoded ID carries a different object type than expected.
    #[error("expected global ID of type {expected}, got {actual}")]
    WrongType { expected: String, actual: String },
}

/// Build a relay-style global ID: base64 of `"{object_type}:{pk}"`.
///
/// This is the opaque node ID format webhook payloads carry for entity
/// references (`"Order"`, `"ProductVariant"`, `"Warehouse"`, ...).
#[must_use]
pub fn global_id(object_type: &str, pk: impl std::fmt::Display) -> String {
    STANDARD.encode(format!("{object_type}:{pk}"))
}

/// Decode a global ID, checking that it carries the expected object type.
///
/// # Errors
///
/// Returns [`GlobalIdError`] if the ID is not base64, not of the `Type:pk`
/// form, or names a different object type.
pub fn parse_global_id(raw: &str, expected_type: &str) -> Result<String, GlobalIdError> {
    let decoded = STANDARD
        .decode(raw)
        .map_err(|_| GlobalIdError::InvalidEncoding(raw.to_string()))?;
    let decoded =
        String::from_utf8(decoded).map_err(|_| GlobalIdError::Malformed(raw.to_string()))?;
    let (object_type, pk) = decoded
        .split_once(':')
        .ok_or_else(|| GlobalIdError::Malformed(decoded.clone()))?;
    if object_type != expected_type {
        return Err(GlobalIdError::WrongType {
            expected: expected_type.to_string(),
            actual: object_type.to_string(),
        });
    }
    Ok(pk.to_string())
}
