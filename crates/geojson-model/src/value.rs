//! [`DynValue`] - JSON value whose kind is only known at read time.
//!
//! Feature ids and property values are typed this way. Unlike
//! `serde_json::Value` it is owned by the model and keeps its own ordered
//! map type, so the model does not leak the tree collaborator's types
//! through its public fields.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::error::{GeoJsonError, Result};

/// Ordered property map of a Feature.
pub type Properties = IndexMap<String, DynValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum DynValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<DynValue>),
    Map(IndexMap<String, DynValue>),
}

impl DynValue {
    /// JSON kind name, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DynValue::Null => "null",
            DynValue::Bool(_) => "boolean",
            DynValue::Number(_) => "number",
            DynValue::String(_) => "string",
            DynValue::List(_) => "array",
            DynValue::Map(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DynValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DynValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// `None` for NaN and infinities, which JSON cannot carry.
    pub fn from_f64(f: f64) -> Option<Self> {
        Number::from_f64(f).map(DynValue::Number)
    }

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => DynValue::Null,
            Value::Bool(b) => DynValue::Bool(*b),
            Value::Number(n) => DynValue::Number(n.clone()),
            Value::String(s) => DynValue::String(s.clone()),
            Value::Array(arr) => DynValue::List(arr.iter().map(DynValue::from_json).collect()),
            Value::Object(obj) => DynValue::Map(
                obj.iter()
                    .map(|(k, v)| (k.clone(), DynValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            DynValue::Null => Value::Null,
            DynValue::Bool(b) => Value::Bool(*b),
            DynValue::Number(n) => Value::Number(n.clone()),
            DynValue::String(s) => Value::String(s.clone()),
            DynValue::List(items) => Value::Array(items.iter().map(DynValue::to_json).collect()),
            DynValue::Map(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), v.to_json());
                }
                Value::Object(out)
            }
        }
    }
}

impl From<&Value> for DynValue {
    fn from(value: &Value) -> Self {
        DynValue::from_json(value)
    }
}

impl From<Value> for DynValue {
    fn from(value: Value) -> Self {
        DynValue::from_json(&value)
    }
}

impl From<&DynValue> for Value {
    fn from(value: &DynValue) -> Self {
        value.to_json()
    }
}

impl From<bool> for DynValue {
    fn from(b: bool) -> Self {
        DynValue::Bool(b)
    }
}

impl From<i64> for DynValue {
    fn from(n: i64) -> Self {
        DynValue::Number(n.into())
    }
}

impl From<u64> for DynValue {
    fn from(n: u64) -> Self {
        DynValue::Number(n.into())
    }
}

impl From<&str> for DynValue {
    fn from(s: &str) -> Self {
        DynValue::String(s.to_string())
    }
}

impl From<String> for DynValue {
    fn from(s: String) -> Self {
        DynValue::String(s)
    }
}

/// Normalizes a Feature id. Only strings and numbers are kept; `null`
/// means "no id".
pub(crate) fn normalize_id(id: Option<DynValue>) -> Result<Option<DynValue>> {
    match id {
        None | Some(DynValue::Null) => Ok(None),
        Some(id @ (DynValue::String(_) | DynValue::Number(_))) => Ok(Some(id)),
        Some(other) => Err(GeoJsonError::InvalidIdType(other.kind())),
    }
}

/// Decodes a JSON object into an ordered property map.
pub(crate) fn properties_from_json(obj: &Map<String, Value>) -> Properties {
    obj.iter()
        .map(|(k, v)| (k.clone(), DynValue::from_json(v)))
        .collect()
}

pub(crate) fn properties_to_json(props: &Properties) -> Value {
    let mut out = Map::with_capacity(props.len());
    for (k, v) in props {
        out.insert(k.clone(), v.to_json());
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_conversion_keeps_kinds_and_order() {
        let src = json!({"z": 1, "a": [true, null, "s", 2.5], "m": {"k": {}}});
        let dyn_value = DynValue::from_json(&src);
        match &dyn_value {
            DynValue::Map(map) => {
                assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
                assert_eq!(map["z"].kind(), "number");
                assert_eq!(map["a"].kind(), "array");
                assert_eq!(map["m"].kind(), "object");
            }
            other => panic!("expected map, got {other:?}"),
        }
        assert_eq!(dyn_value.to_json(), src);
    }

    #[test]
    fn integer_and_float_numbers_differ() {
        assert_ne!(DynValue::from(7i64), DynValue::from_f64(7.0).unwrap());
        assert_eq!(DynValue::from(7i64).as_f64(), Some(7.0));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(DynValue::from_f64(f64::NAN).is_none());
        assert!(DynValue::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn id_normalization() {
        assert_eq!(normalize_id(None), Ok(None));
        assert_eq!(normalize_id(Some(DynValue::Null)), Ok(None));
        assert_eq!(normalize_id(Some("a".into())), Ok(Some("a".into())));
        assert_eq!(normalize_id(Some(7i64.into())), Ok(Some(7i64.into())));
        assert_eq!(
            normalize_id(Some(true.into())),
            Err(GeoJsonError::InvalidIdType("boolean"))
        );
        assert_eq!(
            normalize_id(Some(DynValue::List(vec![]))),
            Err(GeoJsonError::InvalidIdType("array"))
        );
    }
}
