//! Member lookup helpers shared by the variant decoders.

use serde_json::{Map, Value};

use crate::bbox::BoundingBox;
use crate::error::{GeoJsonError, Result};

/// Looks up a required member.
pub(crate) fn required<'v>(
    obj: &'v Map<String, Value>,
    owner: &'static str,
    field: &'static str,
) -> Result<&'v Value> {
    obj.get(field)
        .ok_or(GeoJsonError::MissingField { owner, field })
}

/// Reads `bbox`. Absent and `null` both mean "no box".
pub(crate) fn optional_bbox(obj: &Map<String, Value>) -> Result<Option<BoundingBox>> {
    match obj.get("bbox") {
        None | Some(Value::Null) => Ok(None),
        Some(v) => BoundingBox::from_json(v).map(Some),
    }
}

/// Decodes a JSON array element by element.
pub(crate) fn array_of<T>(
    value: &Value,
    field: &'static str,
    expected: &'static str,
    mut item: impl FnMut(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    let arr = value
        .as_array()
        .ok_or(GeoJsonError::InvalidField { field, expected })?;
    arr.iter().map(&mut item).collect()
}
