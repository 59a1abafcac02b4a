//! Declarative field projection for webhook payloads.
//!
//! A payload item is built in three passes:
//!
//! 1. **Projection** - a fixed allowlist of entity fields is copied into a
//!    mapping. Fields the entity does not carry come out as `null`; nothing
//!    outside the allowlist ever leaks onto the wire.
//! 2. **Extra fields** - constants and per-object closures merge computed
//!    values (nested sub-payloads, derived IDs, deprecated-field shims)
//!    into the mapping.
//! 3. **Identity** - every item gets `"type"` and a relay-style global ID
//!    under a configurable key (`"id"` for most entities, `"token"` for
//!    checkouts).
//!
//! Monetary fields are quantized in place with [`quantize_price_fields`]
//! before the mapping is emitted.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use persimmon_core::{Currency, global_id, quantize_price};

/// An entity that can appear as a payload item.
///
/// `OBJECT_TYPE` is the relay node type carried in `"type"` and encoded
/// into the global ID; `object_id` is the raw primary key.
pub trait PayloadEntity: Serialize {
    const OBJECT_TYPE: &'static str;

    fn object_id(&self) -> String;

    /// The global ID webhook payloads carry for this entity.
    fn payload_id(&self) -> String {
        global_id(Self::OBJECT_TYPE, self.object_id())
    }
}

/// Copy an allowlist of fields from a serializable value into a mapping.
///
/// Fields absent from the serialized form degrade to `null` rather than
/// failing the payload.
#[must_use]
pub fn project<T: Serialize>(obj: &T, fields: &[&str]) -> Map<String, Value> {
    let mut source = match serde_json::to_value(obj) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let mut out = Map::new();
    for &field in fields {
        out.insert(field.to_string(), source.remove(field).unwrap_or(Value::Null));
    }
    out
}

/// Quantize monetary fields of a projected mapping in place.
///
/// Amounts are re-emitted as decimal strings with the currency's full
/// minor-unit scale. Non-numeric and `null` values are left alone.
pub fn quantize_price_fields(map: &mut Map<String, Value>, fields: &[&str], currency: Currency) {
    for &field in fields {
        if let Some(value) = map.get_mut(field) {
            if let Some(amount) = decimal_from_value(value) {
                *value = Value::String(quantize_price(amount, currency).to_string());
            }
        }
    }
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

enum Extra<'a, T> {
    Constant(Value),
    Computed(Box<dyn Fn(&T) -> Value + 'a>),
}

/// A declarative projection over one entity type.
///
/// Mirrors the shape of every payload item: field allowlist, identity key,
/// then extra computed fields layered on top.
pub struct Projection<'a, T: PayloadEntity> {
    fields: &'a [&'a str],
    id_key: &'a str,
    extras: Vec<(String, Extra<'a, T>)>,
}

impl<'a, T: PayloadEntity> Projection<'a, T> {
    /// Projection over the given field allowlist.
    #[must_use]
    pub const fn new(fields: &'a [&'a str]) -> Self {
        Self {
            fields,
            id_key: "id",
            extras: Vec::new(),
        }
    }

    /// Key the global ID is emitted under. Defaults to `"id"`.
    #[must_use]
    pub const fn id_key(mut self, key: &'a str) -> Self {
        self.id_key = key;
        self
    }

    /// Merge a constant value into every item.
    #[must_use]
    pub fn constant(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extras.push((key.into(), Extra::Constant(value)));
        self
    }

    /// Merge a per-object computed value into every item.
    #[must_use]
    pub fn computed(mut self, key: impl Into<String>, f: impl Fn(&T) -> Value + 'a) -> Self {
        self.extras.push((key.into(), Extra::Computed(Box::new(f))));
        self
    }

    /// Merge a projected related entity (or `null` when absent).
    #[must_use]
    pub fn related<R: Serialize>(
        self,
        key: impl Into<String>,
        fields: &'a [&'a str],
        getter: impl Fn(&T) -> Option<&R> + 'a,
    ) -> Self {
        self.computed(key, move |obj| {
            getter(obj).map_or(Value::Null, |related| Value::Object(project(related, fields)))
        })
    }

    /// Merge a list of projected related entities.
    #[must_use]
    pub fn related_many<R: Serialize>(
        self,
        key: impl Into<String>,
        fields: &'a [&'a str],
        getter: impl Fn(&T) -> &[R] + 'a,
    ) -> Self {
        self.computed(key, move |obj| {
            Value::Array(
                getter(obj)
                    .iter()
                    .map(|related| Value::Object(project(related, fields)))
                    .collect(),
            )
        })
    }

    /// Serialize one entity into a payload item.
    #[must_use]
    pub fn serialize_one(&self, obj: &T) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(T::OBJECT_TYPE.to_string()));
        map.insert(self.id_key.to_string(), Value::String(obj.payload_id()));
        for (key, value) in project(obj, self.fields) {
            map.insert(key, value);
        }
        for (key, extra) in &self.extras {
            let value = match extra {
                Extra::Constant(v) => v.clone(),
                Extra::Computed(f) => f(obj),
            };
            map.insert(key.clone(), value);
        }
        Value::Object(map)
    }

    /// Serialize a batch of entities into a payload array.
    #[must_use]
    pub fn serialize(&self, objs: &[T]) -> Value {
        Value::Array(objs.iter().map(|obj| self.serialize_one(obj)).collect())
    }
}
