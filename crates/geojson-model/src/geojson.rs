//! [`GeoJson`] - any GeoJSON document.

use std::str::FromStr;

use serde_json::Value;

use crate::bbox::BoundingBox;
use crate::codec::{self, DecodeContext, GeoJsonObject};
use crate::error::{GeoJsonError, Result};
use crate::feature::Feature;
use crate::feature_collection::FeatureCollection;
use crate::geometry::Geometry;
use crate::types::GeoJsonType;

/// The top-level sum type. Together with [`Geometry`] it covers exactly the
/// nine discriminators.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    pub fn geojson_type(&self) -> GeoJsonType {
        match self {
            GeoJson::Geometry(g) => g.geometry_type(),
            GeoJson::Feature(_) => GeoJsonType::Feature,
            GeoJson::FeatureCollection(_) => GeoJsonType::FeatureCollection,
        }
    }

    pub fn is_three_dimensional(&self) -> bool {
        match self {
            GeoJson::Geometry(g) => g.is_three_dimensional(),
            GeoJson::Feature(f) => f.is_three_dimensional(),
            GeoJson::FeatureCollection(fc) => fc.is_three_dimensional(),
        }
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        match self {
            GeoJson::Geometry(g) => g.bbox(),
            GeoJson::Feature(f) => f.bbox(),
            GeoJson::FeatureCollection(fc) => fc.bbox(),
        }
    }

    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            GeoJson::Geometry(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_feature(&self) -> Option<&Feature> {
        match self {
            GeoJson::Feature(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_feature_collection(&self) -> Option<&FeatureCollection> {
        match self {
            GeoJson::FeatureCollection(fc) => Some(fc),
            _ => None,
        }
    }
}

impl GeoJsonObject for GeoJson {
    fn decode_in(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        let obj = codec::as_object(value)?;
        match codec::read_discriminator(obj)? {
            GeoJsonType::Feature => codec::decode_members(obj, cx).map(GeoJson::Feature),
            GeoJsonType::FeatureCollection => {
                codec::decode_members(obj, cx).map(GeoJson::FeatureCollection)
            }
            geometry => Geometry::decode_as(geometry, obj, cx).map(GeoJson::Geometry),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            GeoJson::Geometry(g) => g.to_json(),
            GeoJson::Feature(f) => codec::encode_variant(f),
            GeoJson::FeatureCollection(fc) => codec::encode_variant(fc),
        }
    }
}

impl FromStr for GeoJson {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        GeoJson::from_json_str(s)
    }
}

impl From<Geometry> for GeoJson {
    fn from(g: Geometry) -> Self {
        GeoJson::Geometry(g)
    }
}

impl From<Feature> for GeoJson {
    fn from(f: Feature) -> Self {
        GeoJson::Feature(f)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(fc: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(fc)
    }
}
