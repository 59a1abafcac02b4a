//! Translation payloads.

use serde_json::{Map, Value, json};

use persimmon_core::{Requestor, global_id};

use crate::meta::{generate_meta, generate_requestor};
use crate::types::{Translation, TranslationContext};

fn context_fields(context: &TranslationContext) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "product_id".to_string(),
        context
            .product_id
            .map_or(Value::Null, |id| json!(global_id("Product", id))),
    );
    map.insert(
        "product_variant_id".to_string(),
        context
            .product_variant_id
            .map_or(Value::Null, |id| json!(global_id("ProductVariant", id))),
    );
    map.insert(
        "attribute_id".to_string(),
        context
            .attribute_id
            .map_or(Value::Null, |id| json!(global_id("Attribute", id))),
    );
    map.insert(
        "page_id".to_string(),
        context
            .page_id
            .map_or(Value::Null, |id| json!(global_id("Page", id))),
    );
    map.insert(
        "page_type_id".to_string(),
        context
            .page_type_id
            .map_or(Value::Null, |id| json!(global_id("PageType", id))),
    );
    map
}

/// The translation payload: the translated object's global ID, the
/// language, and the translated keys as `{key, value}` pairs.
#[tracing::instrument(skip_all)]
pub fn generate_translation_payload(
    translation: &Translation,
    requestor: Option<&Requestor>,
) -> Value {
    let keys: Vec<Value> = translation
        .keys
        .iter()
        .map(|(key, value)| json!({"key": key, "value": value}))
        .collect();

    let mut map = Map::new();
    map.insert(
        "id".to_string(),
        json!(global_id(&translation.object_type, &translation.object_id)),
    );
    map.insert(
        "language_code".to_string(),
        json!(translation.language_code),
    );
    map.insert("type".to_string(), json!(translation.object_type));
    map.insert("keys".to_string(), Value::Array(keys));
    map.insert(
        "meta".to_string(),
        generate_meta(generate_requestor(requestor)),
    );
    if let Some(context) = &translation.context {
        map.extend(context_fields(context));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use persimmon_core::ProductId;

    use super::*;

    #[test]
    fn translation_payload_lists_keys_as_pairs() {
        let translation = Translation {
            object_type: "Product".to_string(),
            object_id: "3".to_string(),
            language_code: "sv".to_string(),
            keys: BTreeMap::from([
                ("name".to_string(), "Stol".to_string()),
                ("description".to_string(), "En stol".to_string()),
            ]),
            context: None,
        };

        let payload = generate_translation_payload(&translation, None);

        assert_eq!(payload["id"], json!(global_id("Product", 3)));
        assert_eq!(payload["type"], json!("Product"));
        assert_eq!(payload["language_code"], json!("sv"));
        assert_eq!(
            payload["keys"],
            json!([
                {"key": "description", "value": "En stol"},
                {"key": "name", "value": "Stol"},
            ])
        );
        assert!(payload.get("product_id").is_none());
    }

    #[test]
    fn attribute_value_translation_carries_context_ids() {
        let translation = Translation {
            object_type: "AttributeValue".to_string(),
            object_id: "10".to_string(),
            language_code: "de".to_string(),
            keys: BTreeMap::new(),
            context: Some(TranslationContext {
                product_id: Some(ProductId::from(3)),
                product_variant_id: None,
                attribute_id: None,
                page_id: None,
                page_type_id: None,
            }),
        };

        let payload = generate_translation_payload(&translation, None);

        assert_eq!(payload["product_id"], json!(global_id("Product", 3)));
        assert_eq!(payload["product_variant_id"], Value::Null);
        assert_eq!(payload["page_type_id"], Value::Null);
    }
}
