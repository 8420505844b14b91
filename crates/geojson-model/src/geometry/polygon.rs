use serde_json::{Map, Value};

use super::{
    coordinates, lines_from_json, lines_to_json, polygons_from_json, polygons_to_json,
    resolve_dimension,
};
use crate::bbox::BoundingBox;
use crate::codec::{optional_bbox, DecodeContext, Variant};
use crate::error::Result;
use crate::position::Position;
use crate::types::GeoJsonType;

/// Rings of a polygon: the exterior first, then holes.
///
/// Ring closure and minimum ring length are not enforced on construction;
/// use [`Polygon::is_closed`] to check them.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    coordinates: Vec<Vec<Position>>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl Polygon {
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

    pub fn exterior(&self) -> Option<&[Position]> {
        self.coordinates.first().map(Vec::as_slice)
    }

    pub fn holes(&self) -> &[Vec<Position>] {
        self.coordinates.get(1..).unwrap_or_default()
    }

    /// True when every ring is a linear ring: at least four positions with
    /// the first equal to the last.
    pub fn is_closed(&self) -> bool {
        self.coordinates.iter().all(|ring| is_linear_ring(ring))
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

fn is_linear_ring(ring: &[Position]) -> bool {
    ring.len() >= 4 && ring.first() == ring.last()
}

impl Variant for Polygon {
    const TYPE: GeoJsonType = GeoJsonType::Polygon;

    fn decode_members(obj: &Map<String, Value>, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        let rings = coordinates::<Self, _>(obj, lines_from_json)?;
        Polygon::new(rings, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert("coordinates".to_string(), lines_to_json(&self.coordinates));
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    coordinates: Vec<Vec<Vec<Position>>>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl MultiPolygon {
    pub fn new(coordinates: Vec<Vec<Vec<Position>>>, bbox: Option<BoundingBox>) -> Result<Self> {
        let three_dimensional =
            resolve_dimension(coordinates.iter().flatten().flatten(), bbox.as_ref())?;
        Ok(Self {
            coordinates,
            bbox,
            three_dimensional,
        })
    }

    pub fn coordinates(&self) -> &[Vec<Vec<Position>>] {
        &self.coordinates
    }

    /// Ring sets of the member polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &[Vec<Position>]> {
        self.coordinates.iter().map(Vec::as_slice)
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl Variant for MultiPolygon {
    const TYPE: GeoJsonType = GeoJsonType::MultiPolygon;

    fn decode_members(obj: &Map<String, Value>, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        let polygons = coordinates::<Self, _>(obj, polygons_from_json)?;
        MultiPolygon::new(polygons, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert(
            "coordinates".to_string(),
            polygons_to_json(&self.coordinates),
        );
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}
