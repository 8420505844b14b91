use serde_json::{Map, Value};

use super::{
    coordinates, lines_from_json, lines_to_json, positions_from_json, positions_to_json,
    resolve_dimension,
};
use crate::bbox::BoundingBox;
use crate::codec::{optional_bbox, DecodeContext, Variant};
use crate::error::Result;
use crate::position::Position;
use crate::types::GeoJsonType;

#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl LineString {
    pub fn new(coordinates: Vec<Position>, bbox: Option<BoundingBox>) -> Result<Self> {
        let three_dimensional = resolve_dimension(&coordinates, bbox.as_ref())?;
        Ok(Self {
            coordinates,
            bbox,
            three_dimensional,
        })
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl Variant for LineString {
    const TYPE: GeoJsonType = GeoJsonType::LineString;

    fn decode_members(obj: &Map<String, Value>, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        let positions = coordinates::<Self, _>(obj, positions_from_json)?;
        LineString::new(positions, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert(
            "coordinates".to_string(),
            positions_to_json(&self.coordinates),
        );
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    coordinates: Vec<Vec<Position>>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl MultiLineString {
    pub fn new(coordinates: Vec<Vec<Position>>, bbox: Option<BoundingBox>) -> Result<Self> {
        let three_dimensional = resolve_dimension(coordinates.iter().flatten(), bbox.as_ref())?;
        Ok(Self {
            coordinates,
            bbox,
            three_dimensional,
        })
    }

    pub fn coordinates(&self) -> &[Vec<Position>] {
        &self.coordinates
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl Variant for MultiLineString {
    const TYPE: GeoJsonType = GeoJsonType::MultiLineString;

    fn decode_members(obj: &Map<String, Value>, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        let lines = coordinates::<Self, _>(obj, lines_from_json)?;
        MultiLineString::new(lines, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert("coordinates".to_string(), lines_to_json(&self.coordinates));
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::GeoJsonObject;
    use crate::error::GeoJsonError;
    use serde_json::json;

    #[test]
    fn line_string_round_trip() {
        let doc = json!({
            "type": "LineString",
            "coordinates": [[100.0, 0.0], [101.0, 1.0]],
            "bbox": [100.0, 0.0, 101.0, 1.0]
        });
        let line = LineString::from_json(&doc).unwrap();
        assert_eq!(line.coordinates().len(), 2);
        assert!(line.bbox().is_some());
        assert_eq!(line.to_json(), doc);
    }

    #[test]
    fn multi_line_string_checks_every_line() {
        let doc = json!({
            "type": "MultiLineString",
            "coordinates": [
                [[100.0, 0.0, 1.0], [101.0, 1.0, 1.0]],
                [[102.0, 2.0, 1.0], [103.0, 3.0]]
            ]
        });
        assert_eq!(
            MultiLineString::from_json(&doc),
            Err(GeoJsonError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn multi_line_string_three_dimensional() {
        let doc = json!({
            "type": "MultiLineString",
            "coordinates": [[[100.0, 0.0, 1.0], [101.0, 1.0, 1.0]]],
            "bbox": [100.0, 0.0, 1.0, 101.0, 1.0, 1.0]
        });
        let mls = MultiLineString::from_json(&doc).unwrap();
        assert!(mls.is_three_dimensional());
        assert_eq!(mls.to_json(), doc);
    }

    #[test]
    fn rejects_flat_coordinates() {
        let doc = json!({"type": "LineString", "coordinates": [1.0, 2.0]});
        assert!(matches!(
            LineString::from_json(&doc),
            Err(GeoJsonError::InvalidField { field: "coordinates", .. })
        ));
    }
}
