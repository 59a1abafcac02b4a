//! Payment transaction snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use persimmon_core::{Currency, TransactionActionType};

use crate::serializer::PayloadEntity;

/// A payment transaction tracked outside the built-in payment flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: i32,
    /// Free-form status set by the payment app.
    pub status: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Reference in the external payment system.
    pub reference: String,
    pub available_actions: Vec<TransactionActionType>,
    pub currency: Currency,
    pub charged_value: Decimal,
    pub authorized_value: Decimal,
    pub refunded_value: Decimal,
    pub voided_value: Decimal,
    pub order_id: Option<Uuid>,
    pub checkout_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl PayloadEntity for TransactionItem {
    const OBJECT_TYPE: &'static str = "TransactionItem";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// An action requested on a transaction, delivered to the handling app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionActionData {
    pub transaction: TransactionItem,
    pub action_type: TransactionActionType,
    /// Amount the action applies to, when the action carries one.
    pub action_value: Option<Decimal>,
}
