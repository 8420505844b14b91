//! `serde` integration routed through the tree codec, so values built by
//! any serde format go through the same validation as `from_json`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::GeoJsonObject;
use crate::feature::Feature;
use crate::feature_collection::FeatureCollection;
use crate::geojson::GeoJson;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

macro_rules! impl_serde_via_tree {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_json().serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = Value::deserialize(deserializer)?;
                    <$ty>::from_json(&value).map_err(D::Error::custom)
                }
            }
        )*
    };
}

impl_serde_via_tree!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Geometry,
    Feature,
    FeatureCollection,
    GeoJson,
);
