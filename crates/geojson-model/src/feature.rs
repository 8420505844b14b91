//! Feature objects (RFC 7946 section 3.2).

use serde_json::{Map, Value};

use crate::bbox::{check_optional, BoundingBox};
use crate::codec::{optional_bbox, required, DecodeContext, GeoJsonObject, Variant};
use crate::error::{GeoJsonError, Result};
use crate::geometry::Geometry;
use crate::types::GeoJsonType;
use crate::value::{normalize_id, properties_from_json, properties_to_json, DynValue, Properties};

/// A geometry with properties and an optional id.
///
/// A feature without geometry is valid ("unlocated"); it encodes as
/// `"geometry": null`.
///
/// Equality compares only the *keys* of `properties` (their set and order),
/// never the values, so two features whose properties differ only in value
/// are equal. See [`crate::equal::feature_equal`].
#[derive(Debug, Clone)]
pub struct Feature {
    geometry: Option<Geometry>,
    properties: Properties,
    id: Option<DynValue>,
    bbox: Option<BoundingBox>,
}

impl Feature {
    /// Builds a feature. `properties` defaults to an empty map, a `null` id
    /// is the same as no id, and any id other than a string or number is
    /// rejected.
    pub fn new(
        geometry: Option<Geometry>,
        properties: Option<Properties>,
        bbox: Option<BoundingBox>,
        id: Option<DynValue>,
    ) -> Result<Self> {
        let three_dimensional = geometry
            .as_ref()
            .is_some_and(Geometry::is_three_dimensional);
        check_optional(bbox.as_ref(), three_dimensional)?;
        Ok(Self {
            geometry,
            properties: properties.unwrap_or_default(),
            id: normalize_id(id)?,
            bbox,
        })
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&DynValue> {
        self.properties.get(key)
    }

    pub fn id(&self) -> Option<&DynValue> {
        self.id.as_ref()
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// The geometry's flag; false for unlocated features.
    pub fn is_three_dimensional(&self) -> bool {
        self.geometry
            .as_ref()
            .is_some_and(Geometry::is_three_dimensional)
    }
}

/// Reads a member that RFC 7946 requires but allows to be `null`.
fn nullable_member<'v>(
    obj: &'v Map<String, Value>,
    field: &'static str,
    cx: &DecodeContext<'_>,
) -> Result<Option<&'v Value>> {
    match obj.get(field) {
        Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(v)),
        None if cx.options().lenient_members => Ok(None),
        None => required(obj, "Feature", field).map(Some),
    }
}

impl Variant for Feature {
    const TYPE: GeoJsonType = GeoJsonType::Feature;

    fn decode_members(obj: &Map<String, Value>, cx: &mut DecodeContext<'_>) -> Result<Self> {
        let geometry = match nullable_member(obj, "geometry", cx)? {
            Some(g) => Some(Geometry::decode_in(g, cx)?),
            None => None,
        };
        let properties = match nullable_member(obj, "properties", cx)? {
            Some(Value::Object(props)) => Some(properties_from_json(props)),
            Some(_) => {
                return Err(GeoJsonError::InvalidField {
                    field: "properties",
                    expected: "an object or null",
                })
            }
            None => None,
        };
        let id = obj.get("id").map(DynValue::from_json);
        Feature::new(geometry, properties, optional_bbox(obj)?, id)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        if let Some(id) = &self.id {
            out.insert("id".to_string(), id.to_json());
        }
        out.insert(
            "geometry".to_string(),
            self.geometry
                .as_ref()
                .map_or(Value::Null, Geometry::to_json),
        );
        out.insert(
            "properties".to_string(),
            properties_to_json(&self.properties),
        );
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

crate::codec::impl_geojson_object!(Feature);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::options::CodecOptions;
    use crate::position::Position;
    use serde_json::json;

    #[test]
    fn unlocated_feature() {
        let f = Feature::new(None, None, None, None).unwrap();
        assert!(f.geometry().is_none());
        assert!(f.properties().is_empty());
        assert!(!f.is_three_dimensional());
        assert_eq!(
            f.to_json(),
            json!({"type": "Feature", "geometry": null, "properties": {}})
        );
    }

    #[test]
    fn unlocated_feature_rejects_3d_bbox() {
        let b6 = BoundingBox::new(vec![0.0; 6]).unwrap();
        assert_eq!(
            Feature::new(None, None, Some(b6), None).unwrap_err(),
            GeoJsonError::BoundingBoxDimensionMismatch {
                len: 6,
                three_dimensional: false
            }
        );
    }

    #[test]
    fn dimension_follows_geometry() {
        let p = Point::new(Position::with_elevation(1.0, 2.0, 3.0).unwrap(), None).unwrap();
        let f = Feature::new(Some(p.into()), None, None, None).unwrap();
        assert!(f.is_three_dimensional());
    }

    #[test]
    fn invalid_id_kinds() {
        let doc = json!({"type": "Feature", "geometry": null, "properties": null, "id": [1]});
        assert_eq!(
            Feature::from_json(&doc).unwrap_err(),
            GeoJsonError::InvalidIdType("array")
        );
        let doc = json!({"type": "Feature", "geometry": null, "properties": null, "id": {"a": 1}});
        assert_eq!(
            Feature::from_json(&doc).unwrap_err(),
            GeoJsonError::InvalidIdType("object")
        );
    }

    #[test]
    fn null_id_means_no_id() {
        let doc = json!({"type": "Feature", "geometry": null, "properties": null, "id": null});
        let f = Feature::from_json(&doc).unwrap();
        assert!(f.id().is_none());
    }

    #[test]
    fn missing_members_strict_and_lenient() {
        let doc = json!({"type": "Feature", "properties": {}});
        assert_eq!(
            Feature::from_json(&doc).unwrap_err(),
            GeoJsonError::MissingField {
                owner: "Feature",
                field: "geometry"
            }
        );
        let f = Feature::from_json_with(&json!({"type": "Feature"}), &CodecOptions::lenient())
            .unwrap();
        assert!(f.geometry().is_none());
        assert!(f.properties().is_empty());
    }

    #[test]
    fn properties_must_be_an_object() {
        let doc = json!({"type": "Feature", "geometry": null, "properties": [1, 2]});
        assert_eq!(
            Feature::from_json(&doc).unwrap_err(),
            GeoJsonError::InvalidField {
                field: "properties",
                expected: "an object or null"
            }
        );
    }

    #[test]
    fn property_lookup() {
        let doc = json!({
            "type": "Feature",
            "geometry": null,
            "properties": {"name": "x", "rank": 3}
        });
        let f = Feature::from_json(&doc).unwrap();
        assert_eq!(f.property("name").and_then(DynValue::as_str), Some("x"));
        assert_eq!(f.property("rank").and_then(DynValue::as_i64), Some(3));
        assert!(f.property("missing").is_none());
    }
}
