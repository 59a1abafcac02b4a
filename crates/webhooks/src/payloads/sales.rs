//! Sale payloads with catalogue diffs.

use std::collections::BTreeSet;

use serde_json::{Value, json};

use persimmon_core::Requestor;

use crate::meta::{generate_meta, generate_requestor};
use crate::serializer::Projection;
use crate::types::{Sale, SaleCatalogue};

fn added(previous: &BTreeSet<String>, current: &BTreeSet<String>) -> Vec<String> {
    current.difference(previous).cloned().collect()
}

/// The sale payload: the sale identity plus what entered and left its
/// catalogue between two snapshots.
#[tracing::instrument(skip_all)]
pub fn generate_sale_payload(
    sale: &Sale,
    previous_catalogue: &SaleCatalogue,
    current_catalogue: &SaleCatalogue,
    requestor: Option<&Requestor>,
) -> Value {
    let projection = Projection::new(&[])
        .constant("meta", generate_meta(generate_requestor(requestor)))
        .constant(
            "categories_added",
            json!(added(&previous_catalogue.categories, &current_catalogue.categories)),
        )
        .constant(
            "categories_removed",
            json!(added(&current_catalogue.categories, &previous_catalogue.categories)),
        )
        .constant(
            "collections_added",
            json!(added(&previous_catalogue.collections, &current_catalogue.collections)),
        )
        .constant(
            "collections_removed",
            json!(added(&current_catalogue.collections, &previous_catalogue.collections)),
        )
        .constant(
            "products_added",
            json!(added(&previous_catalogue.products, &current_catalogue.products)),
        )
        .constant(
            "products_removed",
            json!(added(&current_catalogue.products, &previous_catalogue.products)),
        )
        .constant(
            "variants_added",
            json!(added(&previous_catalogue.variants, &current_catalogue.variants)),
        )
        .constant(
            "variants_removed",
            json!(added(&current_catalogue.variants, &previous_catalogue.variants)),
        );
    Value::Array(vec![projection.serialize_one(sale)])
}

#[cfg(test)]
mod tests {
    use persimmon_core::{SaleId, global_id};

    use super::*;

    #[test]
    fn sale_payload_diffs_catalogues() {
        let sale = Sale { id: SaleId::from(2) };
        let previous = SaleCatalogue {
            products: [global_id("Product", 1), global_id("Product", 2)]
                .into_iter()
                .collect(),
            ..SaleCatalogue::default()
        };
        let current = SaleCatalogue {
            products: [global_id("Product", 2), global_id("Product", 3)]
                .into_iter()
                .collect(),
            ..SaleCatalogue::default()
        };

        let payload = generate_sale_payload(&sale, &previous, &current, None);
        let item = &payload[0];

        assert_eq!(item["type"], json!("Sale"));
        assert_eq!(item["id"], json!(global_id("Sale", 2)));
        assert_eq!(item["products_added"], json!([global_id("Product", 3)]));
        assert_eq!(item["products_removed"], json!([global_id("Product", 1)]));
        assert_eq!(item["categories_added"], json!([]));
    }
}
