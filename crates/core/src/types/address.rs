//! Postal addresses as they appear on the wire.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// The field set is the exact address block webhook payloads project for
/// billing, shipping, warehouse and customer addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub city_area: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    pub country_area: String,
    pub phone: String,
}

/// The address fields projected into webhook payloads, in wire order.
pub const ADDRESS_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "company_name",
    "street_address_1",
    "street_address_2",
    "city",
    "city_area",
    "postal_code",
    "country",
    "country_area",
    "phone",
];
