//! Discriminator-driven codec between the model and `serde_json::Value`.
//!
//! Decoding is top-down: the `"type"` member is read first and the object is
//! handed to the matching variant, which recurses into nested geometries or
//! features. Encoding is bottom-up: each variant writes its own members and
//! the dispatcher wraps them with the discriminator and the optional `bbox`.
//!
//! Two traits split the work:
//! - [`Variant`] is implemented by the nine concrete types. It knows its
//!   fixed discriminator and its own members, nothing else.
//! - [`GeoJsonObject`] is the public entry point, implemented by the
//!   concrete types and by the [`Geometry`](crate::Geometry) and
//!   [`GeoJson`](crate::GeoJson) sum types.

mod context;
mod members;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::bbox::BoundingBox;
use crate::error::{GeoJsonError, Result};
use crate::options::CodecOptions;
use crate::types::GeoJsonType;

pub use context::DecodeContext;
pub(crate) use members::{array_of, optional_bbox, required};

/// A concrete GeoJSON object with a fixed discriminator.
pub trait Variant: Sized {
    const TYPE: GeoJsonType;

    /// Reads the variant's own members. The discriminator has already been
    /// checked by the caller.
    fn decode_members(obj: &Map<String, Value>, cx: &mut DecodeContext<'_>) -> Result<Self>;

    /// Writes the variant's own members, without `type` and `bbox`.
    fn encode_members(&self, out: &mut Map<String, Value>);

    fn bbox(&self) -> Option<&BoundingBox>;
}

/// Anything that can be decoded from and encoded to a GeoJSON document.
pub trait GeoJsonObject: Sized {
    #[doc(hidden)]
    fn decode_in(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self>;

    fn to_json(&self) -> Value;

    fn from_json(value: &Value) -> Result<Self> {
        Self::from_json_with(value, &CodecOptions::default())
    }

    fn from_json_with(value: &Value, options: &CodecOptions) -> Result<Self> {
        let mut cx = DecodeContext::new(options);
        Self::decode_in(value, &mut cx).inspect_err(|err| {
            debug!(error = %err, "rejected GeoJSON document");
        })
    }

    /// Parses GeoJSON text.
    fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    fn to_json_string_pretty(&self) -> String {
        // Serializing a `Value` to a `String` cannot fail.
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }
}

/// Decodes any [`GeoJsonObject`] with default options.
pub fn decode<T: GeoJsonObject>(value: &Value) -> Result<T> {
    T::from_json(value)
}

pub fn decode_with<T: GeoJsonObject>(value: &Value, options: &CodecOptions) -> Result<T> {
    T::from_json_with(value, options)
}

pub fn encode<T: GeoJsonObject>(object: &T) -> Value {
    object.to_json()
}

/// Returns the object map of a document.
pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or(GeoJsonError::InvalidField {
        field: "<root>",
        expected: "a JSON object",
    })
}

/// Reads and resolves the `"type"` member.
pub(crate) fn read_discriminator(obj: &Map<String, Value>) -> Result<GeoJsonType> {
    match obj.get("type") {
        Some(Value::String(s)) => GeoJsonType::parse_str(s),
        Some(other) => Err(GeoJsonError::UnknownDiscriminator(other.to_string())),
        None => Err(GeoJsonError::AbstractConstructionAttempt(
            "object without a 'type' member".to_string(),
        )),
    }
}

/// Decodes a concrete variant, checking the discriminator against `T::TYPE`.
pub(crate) fn decode_variant<T: Variant>(value: &Value, cx: &mut DecodeContext<'_>) -> Result<T> {
    let obj = as_object(value)?;
    let found = read_discriminator(obj)?;
    if found != T::TYPE {
        return Err(GeoJsonError::UnexpectedDiscriminator {
            expected: T::TYPE.as_str(),
            found,
        });
    }
    decode_members::<T>(obj, cx)
}

/// Decodes the members of `T` one nesting level below the current one.
pub(crate) fn decode_members<T: Variant>(
    obj: &Map<String, Value>,
    cx: &mut DecodeContext<'_>,
) -> Result<T> {
    trace!(discriminator = %T::TYPE, depth = cx.depth(), "decoding");
    cx.descend(|cx| T::decode_members(obj, cx))
}

/// Encodes a concrete variant: discriminator, own members, then `bbox`.
pub(crate) fn encode_variant<T: Variant>(object: &T) -> Value {
    let mut out = Map::new();
    out.insert("type".to_string(), Value::String(T::TYPE.as_str().to_string()));
    object.encode_members(&mut out);
    if let Some(bbox) = object.bbox() {
        out.insert("bbox".to_string(), bbox.to_json());
    }
    Value::Object(out)
}

/// Implements [`GeoJsonObject`] for concrete [`Variant`]s.
macro_rules! impl_geojson_object {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::codec::GeoJsonObject for $ty {
                fn decode_in(
                    value: &serde_json::Value,
                    cx: &mut $crate::codec::DecodeContext<'_>,
                ) -> $crate::error::Result<Self> {
                    $crate::codec::decode_variant(value, cx)
                }

                fn to_json(&self) -> serde_json::Value {
                    $crate::codec::encode_variant(self)
                }
            }
        )*
    };
}

pub(crate) use impl_geojson_object;
