//! Geometry objects (RFC 7946 section 3.1).
//!
//! [`Geometry`] is the closed sum over the seven geometry variants. It has
//! no constructor of its own: a value always is one of the variants, and
//! decoding always resolves to one of them through the discriminator.

mod collection;
mod line_string;
mod point;
mod polygon;

use serde_json::{Map, Value};

use crate::bbox::{check_optional, BoundingBox};
use crate::codec::{self, array_of, DecodeContext, GeoJsonObject, Variant};
use crate::error::{GeoJsonError, Result};
use crate::position::{uniform_dimension, Position};
use crate::types::GeoJsonType;

pub use collection::GeometryCollection;
pub use line_string::{LineString, MultiLineString};
pub use point::{MultiPoint, Point};
pub use polygon::{MultiPolygon, Polygon};

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeoJsonType {
        match self {
            Geometry::Point(_) => GeoJsonType::Point,
            Geometry::MultiPoint(_) => GeoJsonType::MultiPoint,
            Geometry::LineString(_) => GeoJsonType::LineString,
            Geometry::MultiLineString(_) => GeoJsonType::MultiLineString,
            Geometry::Polygon(_) => GeoJsonType::Polygon,
            Geometry::MultiPolygon(_) => GeoJsonType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeoJsonType::GeometryCollection,
        }
    }

    pub fn is_three_dimensional(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_three_dimensional(),
            Geometry::MultiPoint(g) => g.is_three_dimensional(),
            Geometry::LineString(g) => g.is_three_dimensional(),
            Geometry::MultiLineString(g) => g.is_three_dimensional(),
            Geometry::Polygon(g) => g.is_three_dimensional(),
            Geometry::MultiPolygon(g) => g.is_three_dimensional(),
            Geometry::GeometryCollection(g) => g.is_three_dimensional(),
        }
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        match self {
            Geometry::Point(g) => g.bbox(),
            Geometry::MultiPoint(g) => g.bbox(),
            Geometry::LineString(g) => g.bbox(),
            Geometry::MultiLineString(g) => g.bbox(),
            Geometry::Polygon(g) => g.bbox(),
            Geometry::MultiPolygon(g) => g.bbox(),
            Geometry::GeometryCollection(g) => g.bbox(),
        }
    }

    /// Dispatches an already-resolved discriminator to its geometry decoder.
    pub(crate) fn decode_as(
        found: GeoJsonType,
        obj: &Map<String, Value>,
        cx: &mut DecodeContext<'_>,
    ) -> Result<Self> {
        match found {
            GeoJsonType::Point => codec::decode_members(obj, cx).map(Geometry::Point),
            GeoJsonType::MultiPoint => codec::decode_members(obj, cx).map(Geometry::MultiPoint),
            GeoJsonType::LineString => codec::decode_members(obj, cx).map(Geometry::LineString),
            GeoJsonType::MultiLineString => {
                codec::decode_members(obj, cx).map(Geometry::MultiLineString)
            }
            GeoJsonType::Polygon => codec::decode_members(obj, cx).map(Geometry::Polygon),
            GeoJsonType::MultiPolygon => {
                codec::decode_members(obj, cx).map(Geometry::MultiPolygon)
            }
            GeoJsonType::GeometryCollection => {
                codec::decode_members(obj, cx).map(Geometry::GeometryCollection)
            }
            GeoJsonType::Feature | GeoJsonType::FeatureCollection => {
                Err(GeoJsonError::UnexpectedDiscriminator {
                    expected: "a geometry",
                    found,
                })
            }
        }
    }
}

impl GeoJsonObject for Geometry {
    fn decode_in(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        let obj = codec::as_object(value)?;
        let found = codec::read_discriminator(obj)?;
        Geometry::decode_as(found, obj, cx)
    }

    fn to_json(&self) -> Value {
        match self {
            Geometry::Point(g) => codec::encode_variant(g),
            Geometry::MultiPoint(g) => codec::encode_variant(g),
            Geometry::LineString(g) => codec::encode_variant(g),
            Geometry::MultiLineString(g) => codec::encode_variant(g),
            Geometry::Polygon(g) => codec::encode_variant(g),
            Geometry::MultiPolygon(g) => codec::encode_variant(g),
            Geometry::GeometryCollection(g) => codec::encode_variant(g),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(g: $variant) -> Self {
                    Geometry::$variant(g)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);

codec::impl_geojson_object!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
);

// ── Coordinate structures ────────────────────────────────────────────────

pub(crate) fn positions_from_json(value: &Value) -> Result<Vec<Position>> {
    array_of(
        value,
        "coordinates",
        "an array of positions",
        Position::from_json,
    )
}

pub(crate) fn lines_from_json(value: &Value) -> Result<Vec<Vec<Position>>> {
    array_of(
        value,
        "coordinates",
        "an array of position arrays",
        positions_from_json,
    )
}

pub(crate) fn polygons_from_json(value: &Value) -> Result<Vec<Vec<Vec<Position>>>> {
    array_of(
        value,
        "coordinates",
        "an array of polygon coordinate arrays",
        lines_from_json,
    )
}

pub(crate) fn positions_to_json(positions: &[Position]) -> Value {
    Value::Array(positions.iter().map(Position::to_json).collect())
}

pub(crate) fn lines_to_json(lines: &[Vec<Position>]) -> Value {
    Value::Array(lines.iter().map(|l| positions_to_json(l)).collect())
}

pub(crate) fn polygons_to_json(polygons: &[Vec<Vec<Position>>]) -> Value {
    Value::Array(polygons.iter().map(|p| lines_to_json(p)).collect())
}

/// Derives the 3-D flag from a set of positions and validates the bbox
/// against it. Empty geometries are 2-D.
pub(crate) fn resolve_dimension<'a, I>(positions: I, bbox: Option<&BoundingBox>) -> Result<bool>
where
    I: IntoIterator<Item = &'a Position>,
{
    let three_dimensional = uniform_dimension(positions)? == Some(3);
    check_optional(bbox, three_dimensional)?;
    Ok(three_dimensional)
}

/// Reads a variant's `coordinates` member with `parse`.
pub(crate) fn coordinates<T: Variant, C>(
    obj: &Map<String, Value>,
    parse: impl FnOnce(&Value) -> Result<C>,
) -> Result<C> {
    parse(codec::required(obj, T::TYPE.as_str(), "coordinates")?)
}
