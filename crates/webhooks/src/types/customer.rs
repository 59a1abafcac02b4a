//! Customer snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use persimmon_core::{Address, Metadata, UserId};

use crate::serializer::PayloadEntity;

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub language_code: String,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
    pub default_shipping_address: Option<Address>,
    pub default_billing_address: Option<Address>,
    pub addresses: Vec<Address>,
}

impl PayloadEntity for Customer {
    const OBJECT_TYPE: &'static str = "User";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}
