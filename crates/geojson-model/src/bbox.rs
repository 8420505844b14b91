//! Bounding boxes (`"bbox"` member).

use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::position::{check_finite, f64_to_json};

/// Axis-aligned extent: `[minX, minY, maxX, maxY]` or
/// `[minX, minY, minZ, maxX, maxY, maxZ]`.
///
/// Values are kept exactly as given. Whether min really is less than max is
/// not checked (RFC 7946 allows boxes crossing the antimeridian).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    values: Vec<f64>,
}

impl BoundingBox {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() != 4 && values.len() != 6 {
            return Err(GeoJsonError::InvalidBoundingBoxLength(values.len()));
        }
        check_finite(&values)?;
        Ok(Self { values })
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.values.len() == 6
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true; a box always holds 4 or 6 values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// The lower corner (2 or 3 values).
    pub fn min(&self) -> &[f64] {
        &self.values[..self.values.len() / 2]
    }

    /// The upper corner (2 or 3 values).
    pub fn max(&self) -> &[f64] {
        &self.values[self.values.len() / 2..]
    }

    /// Checks the box against the dimensionality of the object owning it.
    pub(crate) fn check_owner(&self, three_dimensional: bool) -> Result<()> {
        if self.is_three_dimensional() == three_dimensional {
            Ok(())
        } else {
            Err(GeoJsonError::BoundingBoxDimensionMismatch {
                len: self.values.len(),
                three_dimensional,
            })
        }
    }

    pub(crate) fn from_json(value: &Value) -> Result<Self> {
        let arr = value.as_array().ok_or(GeoJsonError::InvalidField {
            field: "bbox",
            expected: "an array of numbers",
        })?;
        let mut values = Vec::with_capacity(arr.len());
        for v in arr {
            values.push(v.as_f64().ok_or(GeoJsonError::InvalidField {
                field: "bbox",
                expected: "an array of numbers",
            })?);
        }
        Self::new(values)
    }

    pub(crate) fn to_json(&self) -> Value {
        Value::Array(self.values.iter().copied().map(f64_to_json).collect())
    }
}

impl AsRef<[f64]> for BoundingBox {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Validates an optional bbox against its owner.
pub(crate) fn check_optional(bbox: Option<&BoundingBox>, three_dimensional: bool) -> Result<()> {
    match bbox {
        Some(b) => b.check_owner(three_dimensional),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_four_and_six() {
        let b2 = BoundingBox::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert!(!b2.is_three_dimensional());
        assert_eq!(b2.min(), &[0.0, 1.0]);
        assert_eq!(b2.max(), &[2.0, 3.0]);

        let b3 = BoundingBox::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(b3.is_three_dimensional());
        assert_eq!(b3.min(), &[0.0, 1.0, 2.0]);
        assert_eq!(b3.max(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0usize, 1, 2, 3, 5, 7, 8] {
            assert_eq!(
                BoundingBox::new(vec![0.0; len]),
                Err(GeoJsonError::InvalidBoundingBoxLength(len))
            );
        }
    }

    #[test]
    fn owner_dimension_check() {
        let b2 = BoundingBox::new(vec![0.0; 4]).unwrap();
        assert!(b2.check_owner(false).is_ok());
        assert_eq!(
            b2.check_owner(true),
            Err(GeoJsonError::BoundingBoxDimensionMismatch {
                len: 4,
                three_dimensional: true
            })
        );
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = BoundingBox::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let b = BoundingBox::new(vec![1.0, 0.0, 2.0, 3.0]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn json_shape() {
        let b = BoundingBox::from_json(&json!([-10.0, -5.0, 10.0, 5.0])).unwrap();
        assert_eq!(b.to_json(), json!([-10.0, -5.0, 10.0, 5.0]));
        assert_eq!(
            BoundingBox::from_json(&json!([1, 2, 3])),
            Err(GeoJsonError::InvalidBoundingBoxLength(3))
        );
        assert!(BoundingBox::from_json(&json!("nope")).is_err());
    }
}
