//! Value equality for the GeoJSON family.
//!
//! Two objects are equal when their discriminators match and every member
//! compares equal:
//! - positions and bounding boxes element-wise, in order;
//! - geometry and feature lists element-wise, in order;
//! - feature properties by key set and key order only;
//! - ids by value, and only when both ids are the same kind, so `"7"`,
//!   `7` and `7.0` are pairwise unequal.
//!
//! Geometries follow this rule with their derived `PartialEq`; `Feature`
//! implements it by hand through [`feature_equal`]. The functions here are
//! the named forms of the same rule.

use crate::bbox::BoundingBox;
use crate::feature::Feature;
use crate::feature_collection::FeatureCollection;
use crate::geojson::GeoJson;
use crate::geometry::Geometry;
use crate::value::{DynValue, Properties};

pub fn geojson_equal(a: &GeoJson, b: &GeoJson) -> bool {
    match (a, b) {
        (GeoJson::Geometry(a), GeoJson::Geometry(b)) => geometry_equal(a, b),
        (GeoJson::Feature(a), GeoJson::Feature(b)) => feature_equal(a, b),
        (GeoJson::FeatureCollection(a), GeoJson::FeatureCollection(b)) => {
            feature_collection_equal(a, b)
        }
        _ => false,
    }
}

pub fn geometry_equal(a: &Geometry, b: &Geometry) -> bool {
    a == b
}

pub fn feature_equal(a: &Feature, b: &Feature) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    a.geometry() == b.geometry()
        && bbox_equal(a.bbox(), b.bbox())
        && property_keys_equal(a.properties(), b.properties())
        && id_equal(a.id(), b.id())
}

pub fn feature_collection_equal(a: &FeatureCollection, b: &FeatureCollection) -> bool {
    bbox_equal(a.bbox(), b.bbox())
        && a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| feature_equal(x, y))
}

pub fn bbox_equal(a: Option<&BoundingBox>, b: Option<&BoundingBox>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.as_slice() == b.as_slice(),
        (None, None) => true,
        _ => false,
    }
}

/// Same keys in the same order. Values are not compared.
pub fn property_keys_equal(a: &Properties, b: &Properties) -> bool {
    a.len() == b.len() && a.keys().eq(b.keys())
}

/// Ids are equal when both are absent, or both are present with the same
/// kind and value.
pub fn id_equal(a: Option<&DynValue>, b: Option<&DynValue>) -> bool {
    match (a, b) {
        (Some(DynValue::String(a)), Some(DynValue::String(b))) => a == b,
        (Some(DynValue::Number(a)), Some(DynValue::Number(b))) => a == b,
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        feature_equal(self, other)
    }
}
