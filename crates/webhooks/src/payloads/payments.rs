//! Payment gateway payloads.

use serde_json::{Map, Value, json};

use persimmon_core::{Currency, Requestor, quantize_price};

use crate::meta::{generate_meta, generate_requestor};
use crate::payloads::{generate_checkout_payload, into_single_item};
use crate::types::{Checkout, PaymentData, Warehouse, from_payment_app_id};

/// The flat payload a payment app receives for a process-payment event.
///
/// For app-provided gateways the resolved gateway name is added as
/// `payment_method` along with the meta envelope.
#[tracing::instrument(skip_all)]
pub fn generate_payment_payload(
    payment_data: &PaymentData,
    requestor: Option<&Requestor>,
) -> Value {
    let mut map = match serde_json::to_value(payment_data) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    map.insert(
        "amount".to_string(),
        json!(quantize_price(payment_data.amount, payment_data.currency)),
    );
    if let Some(app_data) = from_payment_app_id(&payment_data.gateway) {
        map.insert("payment_method".to_string(), json!(app_data.name));
        map.insert(
            "meta".to_string(),
            generate_meta(generate_requestor(requestor)),
        );
    }
    Value::Object(map)
}

/// The payload for listing available payment gateways, optionally scoped
/// to a checkout.
#[tracing::instrument(skip_all)]
pub fn generate_list_gateways_payload(
    currency: Option<Currency>,
    checkout: Option<&Checkout>,
    warehouse: Option<&Warehouse>,
) -> Value {
    let checkout_data = checkout.map_or(Value::Null, |c| {
        into_single_item(generate_checkout_payload(c, warehouse, None))
    });
    json!({"checkout": checkout_data, "currency": currency})
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use persimmon_core::PaymentId;

    use super::*;

    fn payment_data(gateway: &str) -> PaymentData {
        PaymentData {
            gateway: gateway.to_string(),
            amount: dec!(49.995),
            currency: Currency::USD,
            payment_id: PaymentId::from(15),
            graphql_payment_id: persimmon_core::global_id("Payment", 15),
            order_id: None,
            customer_email: "payer@example.net".to_string(),
            billing: None,
            shipping: None,
        }
    }

    #[test]
    fn app_gateway_gets_payment_method_and_meta() {
        let payload = generate_payment_payload(&payment_data("app:7:adyen-drop-in"), None);

        assert_eq!(payload["amount"], json!("50.00"));
        assert_eq!(payload["payment_method"], json!("adyen-drop-in"));
        assert!(payload["meta"]["issued_at"].is_string());
    }

    #[test]
    fn builtin_gateway_stays_bare() {
        let payload = generate_payment_payload(&payment_data("persimmon.payments.dummy"), None);

        assert_eq!(payload["gateway"], json!("persimmon.payments.dummy"));
        assert!(payload.get("payment_method").is_none());
        assert!(payload.get("meta").is_none());
    }

    #[test]
    fn list_gateways_without_checkout() {
        let payload = generate_list_gateways_payload(Some(Currency::EUR), None, None);
        assert_eq!(payload, json!({"checkout": null, "currency": "EUR"}));
    }
}
