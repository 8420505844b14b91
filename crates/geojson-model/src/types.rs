//! The `"type"` discriminator.

use std::fmt;
use std::str::FromStr;

use crate::error::GeoJsonError;

/// Names that refer to the abstract supertypes rather than a concrete
/// variant. A document carrying one of these can never be decoded.
pub(crate) const ABSTRACT_NAMES: [&str; 3] = ["Geometry", "GeoJson", "GeoJSON"];

/// The nine discriminator values defined by RFC 7946.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

impl GeoJsonType {
    pub const ALL: [GeoJsonType; 9] = [
        GeoJsonType::Point,
        GeoJsonType::MultiPoint,
        GeoJsonType::LineString,
        GeoJsonType::MultiLineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
        GeoJsonType::Feature,
        GeoJsonType::FeatureCollection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeoJsonType::Point => "Point",
            GeoJsonType::MultiPoint => "MultiPoint",
            GeoJsonType::LineString => "LineString",
            GeoJsonType::MultiLineString => "MultiLineString",
            GeoJsonType::Polygon => "Polygon",
            GeoJsonType::MultiPolygon => "MultiPolygon",
            GeoJsonType::GeometryCollection => "GeometryCollection",
            GeoJsonType::Feature => "Feature",
            GeoJsonType::FeatureCollection => "FeatureCollection",
        }
    }

    /// Parses a discriminator. Matching is case-sensitive, as in RFC 7946.
    pub fn parse_str(s: &str) -> Result<Self, GeoJsonError> {
        match s {
            "Point" => Ok(GeoJsonType::Point),
            "MultiPoint" => Ok(GeoJsonType::MultiPoint),
            "LineString" => Ok(GeoJsonType::LineString),
            "MultiLineString" => Ok(GeoJsonType::MultiLineString),
            "Polygon" => Ok(GeoJsonType::Polygon),
            "MultiPolygon" => Ok(GeoJsonType::MultiPolygon),
            "GeometryCollection" => Ok(GeoJsonType::GeometryCollection),
            "Feature" => Ok(GeoJsonType::Feature),
            "FeatureCollection" => Ok(GeoJsonType::FeatureCollection),
            other if ABSTRACT_NAMES.contains(&other) => {
                Err(GeoJsonError::AbstractConstructionAttempt(other.to_string()))
            }
            other => Err(GeoJsonError::UnknownDiscriminator(other.to_string())),
        }
    }

    /// True for the seven geometry discriminators.
    pub fn is_geometry(&self) -> bool {
        !matches!(self, GeoJsonType::Feature | GeoJsonType::FeatureCollection)
    }
}

impl FromStr for GeoJsonType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoJsonType::parse_str(s)
    }
}

impl fmt::Display for GeoJsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
