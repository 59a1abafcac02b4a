//! Scrubbing of personal data before it leaves the platform.
//!
//! Sample payloads are served to app developers who have no business seeing
//! real customer data, so orders and checkouts are anonymized first: the
//! customer identity and both addresses are replaced with generated ones and
//! metadata is cleared.

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;

use persimmon_core::{Address, Metadata, UserId};

use crate::types::{Checkout, Customer, Order};

const FIRST_NAMES: &[&str] = &[
    "Alex", "Casey", "Jamie", "Jordan", "Morgan", "Quinn", "Riley", "Sam", "Taylor", "Avery",
];

const LAST_NAMES: &[&str] = &[
    "Andersson", "Brown", "Garcia", "Johnson", "Kim", "Martin", "Nguyen", "Patel", "Silva",
    "Weber",
];

const STREET_NAMES: &[&str] = &[
    "Cedar Lane", "Elm Street", "Harbor Road", "Main Street", "Oak Avenue", "Park Drive",
];

fn fake_address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    let first_name = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last_name = LAST_NAMES.choose(rng).copied().unwrap_or("Brown");
    Address {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        company_name: String::new(),
        street_address_1: format!("{} {}", rng.random_range(1..=9999), STREET_NAMES.choose(rng).copied().unwrap_or("Main Street")),
        street_address_2: String::new(),
        city: "Springfield".to_owned(),
        city_area: String::new(),
        postal_code: format!("{:05}", rng.random_range(10000..=99999_u32)),
        country: "US".to_owned(),
        country_area: String::new(),
        phone: String::new(),
    }
}

fn fake_email(first_name: &str, last_name: &str) -> String {
    format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

/// A generated customer with no relation to any real account.
#[must_use]
pub fn generate_fake_user() -> Customer {
    let mut rng = rand::rng();
    let first_name = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
    let last_name = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Brown");
    Customer {
        id: UserId::from(rng.random_range(1..=1_000_000)),
        email: fake_email(first_name, last_name),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        is_active: true,
        date_joined: Utc::now(),
        language_code: "en".to_owned(),
        metadata: Metadata::new(),
        private_metadata: Metadata::new(),
        default_shipping_address: None,
        default_billing_address: None,
        addresses: Vec::new(),
    }
}

/// A copy of the order with the customer identity replaced.
#[must_use]
pub fn anonymize_order(order: &Order) -> Order {
    let mut rng = rand::rng();
    let mut anonymized = order.clone();
    let address = fake_address(&mut rng);
    anonymized.user_email = fake_email(&address.first_name, &address.last_name);
    if anonymized.shipping_address.is_some() {
        anonymized.shipping_address = Some(address.clone());
    }
    if anonymized.billing_address.is_some() {
        anonymized.billing_address = Some(address);
    }
    anonymized.metadata = Metadata::new();
    anonymized.private_metadata = Metadata::new();
    anonymized
}

/// A copy of the checkout with the customer identity replaced.
#[must_use]
pub fn anonymize_checkout(checkout: &Checkout) -> Checkout {
    let mut rng = rand::rng();
    let mut anonymized = checkout.clone();
    let address = fake_address(&mut rng);
    anonymized.email = fake_email(&address.first_name, &address.last_name);
    anonymized.user = anonymized.user.map(|_| generate_fake_user());
    if anonymized.shipping_address.is_some() {
        anonymized.shipping_address = Some(address.clone());
    }
    if anonymized.billing_address.is_some() {
        anonymized.billing_address = Some(address);
    }
    anonymized.metadata = Metadata::new();
    anonymized.private_metadata = Metadata::new();
    anonymized
}
