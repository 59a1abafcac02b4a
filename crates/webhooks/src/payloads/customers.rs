//! Customer payloads.

use serde_json::Value;

use persimmon_core::{ADDRESS_FIELDS, Requestor};

use crate::meta::{generate_meta, generate_requestor};
use crate::serializer::Projection;
use crate::types::Customer;

#[tracing::instrument(skip_all)]
pub fn generate_customer_payload(customer: &Customer, requestor: Option<&Requestor>) -> Value {
    const CUSTOMER_FIELDS: &[&str] = &[
        "email",
        "first_name",
        "last_name",
        "is_active",
        "date_joined",
        "language_code",
        "private_metadata",
        "metadata",
    ];
    let projection = Projection::new(CUSTOMER_FIELDS)
        .related("default_shipping_address", ADDRESS_FIELDS, |c: &Customer| {
            c.default_shipping_address.as_ref()
        })
        .related("default_billing_address", ADDRESS_FIELDS, |c: &Customer| {
            c.default_billing_address.as_ref()
        })
        .related_many("addresses", ADDRESS_FIELDS, |c: &Customer| {
            c.addresses.as_slice()
        })
        .constant("meta", generate_meta(generate_requestor(requestor)));
    Value::Array(vec![projection.serialize_one(customer)])
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use persimmon_core::{Address, Metadata, UserId, global_id};

    use super::*;

    #[test]
    fn customer_payload_projects_addresses() {
        let customer = Customer {
            id: UserId::from(12),
            email: "pat@example.net".to_string(),
            first_name: "Pat".to_string(),
            last_name: "Lee".to_string(),
            is_active: true,
            date_joined: Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
            language_code: "en".to_string(),
            metadata: Metadata::new(),
            private_metadata: Metadata::new(),
            default_shipping_address: None,
            default_billing_address: None,
            addresses: vec![Address {
                first_name: "Pat".to_string(),
                last_name: "Lee".to_string(),
                company_name: String::new(),
                street_address_1: "5 High St".to_string(),
                street_address_2: String::new(),
                city: "Leeds".to_string(),
                city_area: String::new(),
                postal_code: "LS1 1AA".to_string(),
                country: "GB".to_string(),
                country_area: String::new(),
                phone: String::new(),
            }],
        };

        let payload = generate_customer_payload(&customer, None);
        let item = &payload[0];

        assert_eq!(item["type"], json!("User"));
        assert_eq!(item["id"], json!(global_id("User", 12)));
        assert_eq!(item["default_shipping_address"], Value::Null);
        assert_eq!(item["addresses"][0]["city"], json!("Leeds"));
        // the raw account id never appears, only the global one
        assert_eq!(item["email"], json!("pat@example.net"));
    }
}
