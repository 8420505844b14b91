use serde_json::{Map, Value};

use super::Geometry;
use crate::bbox::{check_optional, BoundingBox};
use crate::codec::{array_of, optional_bbox, required, DecodeContext, GeoJsonObject, Variant};
use crate::error::Result;
use crate::types::GeoJsonType;

/// Heterogeneous list of geometries.
///
/// Children may differ in dimensionality; the collection is 3-D when any
/// child is.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    bbox: Option<BoundingBox>,
    three_dimensional: bool,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>, bbox: Option<BoundingBox>) -> Result<Self> {
        let three_dimensional = geometries.iter().any(Geometry::is_three_dimensional);
        check_optional(bbox.as_ref(), three_dimensional)?;
        Ok(Self {
            geometries,
            bbox,
            three_dimensional,
        })
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.geometries.iter()
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl<'a> IntoIterator for &'a GeometryCollection {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometries.iter()
    }
}

impl Variant for GeometryCollection {
    const TYPE: GeoJsonType = GeoJsonType::GeometryCollection;

    fn decode_members(obj: &Map<String, Value>, cx: &mut DecodeContext<'_>) -> Result<Self> {
        let geometries = array_of(
            required(obj, "GeometryCollection", "geometries")?,
            "geometries",
            "an array of geometries",
            |g| Geometry::decode_in(g, cx),
        )?;
        GeometryCollection::new(geometries, optional_bbox(obj)?)
    }

    fn encode_members(&self, out: &mut Map<String, Value>) {
        out.insert(
            "geometries".to_string(),
            Value::Array(self.geometries.iter().map(Geometry::to_json).collect()),
        );
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}
