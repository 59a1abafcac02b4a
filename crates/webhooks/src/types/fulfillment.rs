//! Fulfillment snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use persimmon_core::{FulfillmentId, FulfillmentStatus, WarehouseId};

use crate::serializer::PayloadEntity;
use crate::types::order::OrderLine;

/// A line of a fulfillment, tied back to the order line it ships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentLine {
    pub id: i32,
    pub quantity: i32,
    pub order_line: OrderLine,
    /// Warehouse the stock was taken from, when known.
    pub warehouse_id: Option<WarehouseId>,
}

impl PayloadEntity for FulfillmentLine {
    const OBJECT_TYPE: &'static str = "FulfillmentLine";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

/// A fulfillment of (part of) an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fulfillment {
    pub id: FulfillmentId,
    pub status: FulfillmentStatus,
    pub tracking_number: String,
    pub created_at: DateTime<Utc>,
    pub shipping_refund_amount: Option<Decimal>,
    pub total_refund_amount: Option<Decimal>,
    pub lines: Vec<FulfillmentLine>,
}

impl PayloadEntity for Fulfillment {
    const OBJECT_TYPE: &'static str = "Fulfillment";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}
