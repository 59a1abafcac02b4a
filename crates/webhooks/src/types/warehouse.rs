//! Warehouse snapshots.

use serde::{Deserialize, Serialize};

use persimmon_core::{Address, ClickAndCollectOption, WarehouseId};

use crate::serializer::PayloadEntity;

/// A warehouse, also usable as a click-and-collect pickup point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub email: String,
    pub click_and_collect_option: ClickAndCollectOption,
    pub is_private: bool,
    pub address: Address,
}

impl PayloadEntity for Warehouse {
    const OBJECT_TYPE: &'static str = "Warehouse";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}
