//! Payment snapshots and the gateway payment interface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use persimmon_core::{Address, ChargeStatus, Currency, PaymentId};

use crate::serializer::PayloadEntity;

/// A payment recorded against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub gateway: String,
    pub payment_method_type: String,
    pub cc_brand: Option<String>,
    pub is_active: bool,
    /// Whether this payment covers only part of the order total.
    pub partial: bool,
    pub charge_status: ChargeStatus,
    pub psp_reference: Option<String>,
    pub total: Decimal,
    pub captured_amount: Decimal,
    pub currency: Currency,
    pub billing_email: String,
    pub billing_first_name: String,
    pub billing_last_name: String,
    pub billing_company_name: String,
    pub billing_address_1: String,
    pub billing_address_2: String,
    pub billing_city: String,
    pub billing_city_area: String,
    pub billing_postal_code: String,
    pub billing_country_code: String,
    pub billing_country_area: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl PayloadEntity for Payment {
    const OBJECT_TYPE: &'static str = "Payment";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// The data a payment gateway receives when asked to process a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentData {
    pub gateway: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub payment_id: PaymentId,
    /// Global ID of the payment, as API clients know it.
    pub graphql_payment_id: String,
    pub order_id: Option<Uuid>,
    pub customer_email: String,
    pub billing: Option<Address>,
    pub shipping: Option<Address>,
}

/// Identity of an app-provided payment gateway, parsed from its gateway ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAppData {
    pub app_id: i32,
    pub name: String,
}

/// Parse an `app:<app-id>:<gateway-name>` gateway identifier.
///
/// Returns `None` for built-in gateways, which use plain dotted names.
#[must_use]
pub fn from_payment_app_id(gateway_id: &str) -> Option<PaymentAppData> {
    let mut parts = gateway_id.splitn(3, ':');
    if parts.next() != Some("app") {
        return None;
    }
    let app_id = parts.next()?.parse().ok()?;
    let name = parts.next()?;
    if name.is_empty() {
        return None;
    }
    Some(PaymentAppData {
        app_id,
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_app_gateway_ids() {
        assert_eq!(
            from_payment_app_id("app:42:stripe-connect"),
            Some(PaymentAppData {
                app_id: 42,
                name: "stripe-connect".to_string(),
            })
        );
    }

    #[test]
    fn rejects_builtin_and_malformed_ids() {
        assert_eq!(from_payment_app_id("persimmon.payments.dummy"), None);
        assert_eq!(from_payment_app_id("app:not-a-number:x"), None);
        assert_eq!(from_payment_app_id("app:42"), None);
        assert_eq!(from_payment_app_id("app:42:"), None);
    }
}
