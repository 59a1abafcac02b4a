//! Transaction action payloads.

use serde_json::{Value, json};

use persimmon_core::{Requestor, global_id, quantize_price};

use crate::meta::{generate_meta, generate_requestor};
use crate::types::TransactionActionData;

/// The payload delivered when staff request an action (charge, refund,
/// void) on a transaction handled by an app.
#[tracing::instrument(skip_all)]
pub fn generate_transaction_action_request_payload(
    transaction_data: &TransactionActionData,
    requestor: Option<&Requestor>,
) -> Value {
    let transaction = &transaction_data.transaction;
    let currency = transaction.currency;

    let action_value = transaction_data
        .action_value
        .map(|value| quantize_price(value, currency));

    json!({
        "action": {
            "type": transaction_data.action_type,
            "value": action_value,
            "currency": currency,
        },
        "transaction": {
            "status": transaction.status,
            "type": transaction.transaction_type,
            "reference": transaction.reference,
            "available_actions": transaction.available_actions,
            "currency": currency,
            "charged_value": quantize_price(transaction.charged_value, currency),
            "authorized_value": quantize_price(transaction.authorized_value, currency),
            "refunded_value": quantize_price(transaction.refunded_value, currency),
            "voided_value": quantize_price(transaction.voided_value, currency),
            "order_id": transaction.order_id.map(|id| global_id("Order", id)),
            "checkout_id": transaction.checkout_id.map(|id| global_id("Checkout", id)),
            "created_at": transaction.created_at,
            "modified_at": transaction.modified_at,
        },
        "meta": generate_meta(generate_requestor(requestor)),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use persimmon_core::{Currency, TransactionActionType};

    use super::*;
    use crate::types::TransactionItem;

    #[test]
    fn action_request_quantizes_amounts_and_resolves_ids() {
        let data = TransactionActionData {
            transaction: TransactionItem {
                id: 3,
                status: "authorized".to_string(),
                transaction_type: "card".to_string(),
                reference: "psp-123".to_string(),
                available_actions: vec![
                    TransactionActionType::Charge,
                    TransactionActionType::Void,
                ],
                currency: Currency::USD,
                charged_value: dec!(0),
                authorized_value: dec!(80),
                refunded_value: dec!(0),
                voided_value: dec!(0),
                order_id: Some(Uuid::from_u128(0x55)),
                checkout_id: None,
                created_at: Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap(),
                modified_at: Utc.with_ymd_and_hms(2024, 7, 1, 9, 5, 0).unwrap(),
            },
            action_type: TransactionActionType::Charge,
            action_value: Some(dec!(80)),
        };

        let payload = generate_transaction_action_request_payload(&data, None);

        assert_eq!(payload["action"]["type"], json!("charge"));
        assert_eq!(payload["action"]["value"], json!("80.00"));
        assert_eq!(payload["transaction"]["authorized_value"], json!("80.00"));
        assert_eq!(
            payload["transaction"]["order_id"],
            json!(global_id("Order", Uuid::from_u128(0x55)))
        );
        assert_eq!(payload["transaction"]["checkout_id"], Value::Null);
        assert_eq!(
            payload["transaction"]["available_actions"],
            json!(["charge", "void"])
        );
    }
}
