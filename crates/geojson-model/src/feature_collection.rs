//! FeatureCollection objects (RFC 7946 section 3.3).

use serde_json::{Map, Value};

use crate::bbox::{check_optional, BoundingBox};
use crate::codec::{array_of, optional_bbox, required, DecodeContext, GeoJsonObject, Variant};
use crate::error::Result;
use crate::feature::Feature;
use crate::types::GeoJsonType;

/// Ordered list of features. 3-D when any feature is.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>, bbox: Option<BoundingBox>) -> Result<Self> {
        let three_dimensional = features.iter().any(Feature::is_three_dimensional);
        check_optional(bbox.as_ref(), three_dimensional)?;
        Ok(Self {
            features,
            bbox,
            three_dimensional,
        })
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl Variant for FeatureCollection {
    const TYPE: GeoJsonType = GeoJsonType::FeatureCollection;

    fn decode_members(obj: &Map<String, Value>, cx: &mut DecodeContext<'_>) -> Result<Self> {
        let features = array_of(
            required(obj, "FeatureCollection", "features")?,
            "features",
            "an array of features",
            |f| Feature::decode_in(f, cx),
        )?;
        FeatureCollection::new(features, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert(
            "features".to_string(),
            Value::Array(self.features.iter().map(Feature::to_json).collect()),
        );
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

crate::codec::impl_geojson_object!(FeatureCollection);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoJsonError;
    use serde_json::json;

    #[test]
    fn decodes_features_in_order() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": "a", "geometry": null, "properties": {}},
                {"type": "Feature", "id": "b", "geometry": {"type": "Point", "coordinates": [1.0, 2.0, 3.0]}, "properties": {}}
            ]
        });
        let fc = FeatureCollection::from_json(&doc).unwrap();
        let ids: Vec<_> = fc.iter().filter_map(|f| f.id()?.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(fc.is_three_dimensional());
        assert_eq!(fc.to_json(), doc);
    }

    #[test]
    fn empty_collection() {
        let fc = FeatureCollection::new(vec![], None).unwrap();
        assert!(fc.is_empty());
        assert_eq!(fc.to_json(), json!({"type": "FeatureCollection", "features": []}));
    }

    #[test]
    fn members_must_be_features() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [{"type": "Point", "coordinates": [1.0, 2.0]}]
        });
        assert_eq!(
            FeatureCollection::from_json(&doc).unwrap_err(),
            GeoJsonError::UnexpectedDiscriminator {
                expected: "Feature",
                found: GeoJsonType::Point
            }
        );
    }

    #[test]
    fn requires_features_member() {
        assert_eq!(
            FeatureCollection::from_json(&json!({"type": "FeatureCollection"})).unwrap_err(),
            GeoJsonError::MissingField {
                owner: "FeatureCollection",
                field: "features"
            }
        );
    }
}
