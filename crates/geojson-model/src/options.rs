//! Decoder configuration.

/// Options controlling how documents are decoded.
///
/// Encoding takes no options: a constructed value always encodes the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Maximum nesting of GeoJSON objects (a FeatureCollection holding a
    /// Feature holding a Point is three levels).
    pub max_depth: usize,
    /// Treat an absent Feature `geometry` or `properties` member as `null`
    /// instead of failing with `MissingField`.
    pub lenient_members: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            lenient_members: false,
        }
    }
}

impl CodecOptions {
    pub fn lenient() -> Self {
        Self {
            lenient_members: true,
            ..Default::default()
        }
    }
}
