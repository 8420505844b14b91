//! geojson-model - GeoJSON (RFC 7946) object model and JSON tree codec.
//!
//! Documents are decoded from and encoded to [`serde_json::Value`]. The
//! `"type"` member drives decoding: it selects one of the nine concrete
//! variants, and construction enforces the structural invariants
//! (uniform coordinate dimensionality, bounding-box shape, id kinds) so
//! every value in memory is well-formed and encodes without error.
//!
//! ```
//! use geojson_model::{GeoJson, GeoJsonObject};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "type": "Feature",
//!     "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
//!     "properties": {"name": "x"},
//!     "id": 7
//! });
//! let gj = GeoJson::from_json(&doc).unwrap();
//! let feature = gj.as_feature().unwrap();
//! assert_eq!(feature.id().and_then(|id| id.as_i64()), Some(7));
//! assert_eq!(gj.to_json(), doc);
//! ```

pub mod bbox;
pub mod codec;
pub mod equal;
pub mod error;
pub mod feature;
pub mod feature_collection;
pub mod geojson;
pub mod geometry;
pub mod hash;
pub mod options;
pub mod position;
pub mod types;
pub mod value;

mod serde_impl;

pub use bbox::BoundingBox;
pub use codec::{decode, decode_with, encode, GeoJsonObject};
pub use error::{GeoJsonError, Result};
pub use feature::Feature;
pub use feature_collection::FeatureCollection;
pub use geojson::GeoJson;
pub use geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use hash::{hash_geojson, StructHash};
pub use options::CodecOptions;
pub use position::Position;
pub use types::GeoJsonType;
pub use value::{DynValue, Properties};
