//! Structural hashing consistent with [`crate::equal`].
//!
//! Every type folds, in order, its discriminator and exactly the members its
//! equality compares. Feature properties contribute their keys only.

use std::hash::{Hash, Hasher};

use geojson_struct_hash::StructHasher;

use crate::bbox::BoundingBox;
use crate::feature::Feature;
use crate::feature_collection::FeatureCollection;
use crate::geojson::GeoJson;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::position::Position;
use crate::types::GeoJsonType;
use crate::value::DynValue;

pub trait StructHash {
    fn write_struct_hash(&self, hasher: &mut StructHasher);

    fn struct_hash(&self) -> u32 {
        let mut hasher = StructHasher::new();
        self.write_struct_hash(&mut hasher);
        hasher.finish()
    }
}

pub fn hash_geojson(value: &GeoJson) -> u32 {
    value.struct_hash()
}

fn write_type(hasher: &mut StructHasher, t: GeoJsonType) {
    hasher.write_str(t.as_str());
}

fn write_bbox(hasher: &mut StructHasher, bbox: Option<&BoundingBox>) {
    match bbox {
        Some(b) => {
            hasher.write_seq_header(b.len());
            for v in b.as_slice() {
                hasher.write_f64(*v);
            }
        }
        None => {
            hasher.write_absent();
        }
    }
}

fn write_seq<T: StructHash>(hasher: &mut StructHasher, items: &[T]) {
    hasher.write_seq_header(items.len());
    for item in items {
        item.write_struct_hash(hasher);
    }
}

impl StructHash for Position {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        hasher
            .write_seq_header(self.dimension())
            .write_f64(self.longitude())
            .write_f64(self.latitude());
        if let Some(z) = self.elevation() {
            hasher.write_f64(z);
        }
    }
}

impl<T: StructHash> StructHash for [T] {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        write_seq(hasher, self);
    }
}

impl<T: StructHash> StructHash for Vec<T> {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        write_seq(hasher, self);
    }
}

impl StructHash for DynValue {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        hasher.write_json(&self.to_json());
    }
}

macro_rules! impl_coordinate_struct_hash {
    ($($ty:ty),*) => {
        $(
            impl StructHash for $ty {
                fn write_struct_hash(&self, hasher: &mut StructHasher) {
                    write_type(hasher, <$ty as $crate::codec::Variant>::TYPE);
                    self.coordinates().write_struct_hash(hasher);
                    write_bbox(hasher, self.bbox());
                }
            }
        )*
    };
}

impl_coordinate_struct_hash!(Point, MultiPoint, LineString, MultiLineString, Polygon, MultiPolygon);

impl StructHash for GeometryCollection {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        write_type(hasher, GeoJsonType::GeometryCollection);
        write_seq(hasher, self.geometries());
        write_bbox(hasher, self.bbox());
    }
}

impl StructHash for Geometry {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        match self {
            Geometry::Point(g) => g.write_struct_hash(hasher),
            Geometry::MultiPoint(g) => g.write_struct_hash(hasher),
            Geometry::LineString(g) => g.write_struct_hash(hasher),
            Geometry::MultiLineString(g) => g.write_struct_hash(hasher),
            Geometry::Polygon(g) => g.write_struct_hash(hasher),
            Geometry::MultiPolygon(g) => g.write_struct_hash(hasher),
            Geometry::GeometryCollection(g) => g.write_struct_hash(hasher),
        }
    }
}

impl StructHash for Feature {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        write_type(hasher, GeoJsonType::Feature);
        match self.geometry() {
            Some(g) => g.write_struct_hash(hasher),
            None => {
                hasher.write_absent();
            }
        }
        write_bbox(hasher, self.bbox());
        hasher.write_seq_header(self.properties().len());
        for key in self.properties().keys() {
            hasher.write_str(key);
        }
        match self.id() {
            Some(id) => id.write_struct_hash(hasher),
            None => {
                hasher.write_absent();
            }
        }
    }
}

impl StructHash for FeatureCollection {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        write_type(hasher, GeoJsonType::FeatureCollection);
        write_seq(hasher, self.features());
        write_bbox(hasher, self.bbox());
    }
}

impl StructHash for GeoJson {
    fn write_struct_hash(&self, hasher: &mut StructHasher) {
        match self {
            GeoJson::Geometry(g) => g.write_struct_hash(hasher),
            GeoJson::Feature(f) => f.write_struct_hash(hasher),
            GeoJson::FeatureCollection(fc) => fc.write_struct_hash(hasher),
        }
    }
}

macro_rules! impl_std_hash {
    ($($ty:ty),*) => {
        $(
            impl Hash for $ty {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    state.write_u32(self.struct_hash());
                }
            }
        )*
    };
}

impl_std_hash!(
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
    GeoJson
);
