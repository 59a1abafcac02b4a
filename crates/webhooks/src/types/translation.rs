//! Translation snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use persimmon_core::{AttributeId, PageId, PageTypeId, ProductId, VariantId};

/// Identifiers of the objects a translation hangs off, used by attribute
/// value translations to locate their owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationContext {
    pub product_id: Option<ProductId>,
    pub product_variant_id: Option<VariantId>,
    pub attribute_id: Option<AttributeId>,
    pub page_id: Option<PageId>,
    pub page_type_id: Option<PageTypeId>,
}

/// A translation of one translatable object into one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// GraphQL type name of the translated object, e.g. `"Product"`.
    pub object_type: String,
    /// Primary key of the translated object, rendered as text.
    pub object_id: String,
    pub language_code: String,
    /// Translated field name to translated text.
    pub keys: BTreeMap<String, String>,
    pub context: Option<TranslationContext>,
}
