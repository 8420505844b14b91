use serde_json::{Map, Value};

use super::{coordinates, positions_from_json, positions_to_json, resolve_dimension};
use crate::bbox::{check_optional, BoundingBox};
use crate::codec::{optional_bbox, DecodeContext, Variant};
use crate::error::Result;
use crate::position::Position;
use crate::types::GeoJsonType;

/// A single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Position,
    bbox: Option<BoundingBox>,
}

impl Point {
    pub fn new(coordinates: Position, bbox: Option<BoundingBox>) -> Result<Self> {
        check_optional(bbox.as_ref(), coordinates.is_three_dimensional())?;
        Ok(Self { coordinates, bbox })
    }

    pub fn coordinates(&self) -> &Position {
        &self.coordinates
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.coordinates.is_three_dimensional()
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl Variant for Point {
    const TYPE: GeoJsonType = GeoJsonType::Point;

    fn decode_members(obj: &Map<String, Value>, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        let position = coordinates::<Self, _>(obj, Position::from_json)?;
        Point::new(position, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert("coordinates".to_string(), self.coordinates.to_json());
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// An unordered set of positions, kept in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl MultiPoint {
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

impl Variant for MultiPoint {
    const TYPE: GeoJsonType = GeoJsonType::MultiPoint;

    fn decode_members(obj: &Map<String, Value>, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        let positions = coordinates::<Self, _>(obj, positions_from_json)?;
        MultiPoint::new(positions, optional_bbox(obj)?)
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
