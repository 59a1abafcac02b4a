//! Status enums and wire-format vocabulary for domain entities.
//!
//! Serde renames match the strings webhook subscribers see; changing a
//! variant name here is a wire-format change.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Unconfirmed,
    #[default]
    Unfulfilled,
    PartiallyFulfilled,
    Fulfilled,
    PartiallyReturned,
    Returned,
    Canceled,
    Expired,
}

/// How an order came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderOrigin {
    #[default]
    Checkout,
    Draft,
    Reissue,
}

/// Fulfillment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    #[default]
    Fulfilled,
    Refunded,
    Returned,
    Replaced,
    RefundedAndReturned,
    Canceled,
    WaitingForApproval,
}

/// Payment charge status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChargeStatus {
    #[default]
    #[serde(rename = "not-charged")]
    NotCharged,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "partially-charged")]
    PartiallyCharged,
    #[serde(rename = "fully-charged")]
    FullyCharged,
    #[serde(rename = "partially-refunded")]
    PartiallyRefunded,
    #[serde(rename = "fully-refunded")]
    FullyRefunded,
    #[serde(rename = "refused")]
    Refused,
    #[serde(rename = "cancelled")]
    Cancelled,
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountValueType {
    #[default]
    Fixed,
    Percentage,
}

/// Whether a warehouse can be used as a pickup point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClickAndCollectOption {
    #[default]
    Disabled,
    Local,
    All,
}

/// Kind of media attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductMediaType {
    #[default]
    Image,
    Video,
}

/// Action requested from a payment app on a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionActionType {
    Charge,
    Refund,
    Void,
}

/// How an app was installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppType {
    /// Created in-dashboard, authenticates with its own tokens.
    #[default]
    Local,
    /// Installed from a manifest URL.
    Thirdparty,
}

/// Dashboard location where an app extension is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppExtensionMount {
    ProductOverviewCreate,
    ProductOverviewMoreActions,
    ProductDetailsMoreActions,
    NavigationCatalog,
    NavigationOrders,
    NavigationCustomers,
    NavigationDiscounts,
    NavigationTranslations,
    NavigationPages,
    OrderDetailsMoreActions,
    OrderOverviewCreate,
    OrderOverviewMoreActions,
    CustomerDetailsMoreActions,
    CustomerOverviewCreate,
    CustomerOverviewMoreActions,
}

/// How an app extension is opened from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppExtensionTarget {
    /// Open in a modal overlay.
    #[default]
    Popup,
    /// Open as a full dashboard page.
    AppPage,
}
