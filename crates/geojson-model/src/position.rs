//! A single coordinate tuple.

use serde_json::{Number, Value};

use crate::error::{GeoJsonError, Result};

/// Longitude, latitude and an optional elevation.
///
/// Always 2 or 3 finite values; other lengths cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        check_finite(&[longitude, latitude])?;
        Ok(Self {
            x: longitude,
            y: latitude,
            z: None,
        })
    }

    pub fn with_elevation(longitude: f64, latitude: f64, elevation: f64) -> Result<Self> {
        check_finite(&[longitude, latitude, elevation])?;
        Ok(Self {
            x: longitude,
            y: latitude,
            z: Some(elevation),
        })
    }

    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y] => Self::new(x, y),
            [x, y, z] => Self::with_elevation(x, y, z),
            _ => Err(GeoJsonError::InvalidPosition(values.len())),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.x
    }

    pub fn latitude(&self) -> f64 {
        self.y
    }

    pub fn elevation(&self) -> Option<f64> {
        self.z
    }

    /// 2 or 3.
    pub fn dimension(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.z.is_some()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = vec![self.x, self.y];
        out.extend(self.z);
        out
    }

    pub(crate) fn from_json(value: &Value) -> Result<Self> {
        let arr = value.as_array().ok_or(GeoJsonError::InvalidField {
            field: "coordinates",
            expected: "an array of numbers per position",
        })?;
        let mut values = Vec::with_capacity(arr.len());
        for v in arr {
            values.push(v.as_f64().ok_or(GeoJsonError::InvalidField {
                field: "coordinates",
                expected: "numeric positions",
            })?);
        }
        Self::from_slice(&values)
    }

    pub(crate) fn to_json(&self) -> Value {
        Value::Array(self.to_vec().into_iter().map(f64_to_json).collect())
    }
}

/// Converts a finite double. Non-finite values never reach here because
/// every constructor rejects them.
pub(crate) fn f64_to_json(f: f64) -> Value {
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}

pub(crate) fn check_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeoJsonError::NonFiniteCoordinate)
    }
}

/// Checks that every position has the same dimension and returns it, or
/// `None` when there are no positions at all.
pub(crate) fn uniform_dimension<'a, I>(positions: I) -> Result<Option<usize>>
where
    I: IntoIterator<Item = &'a Position>,
{
    let mut expected: Option<usize> = None;
    for p in positions {
        match expected {
            None => expected = Some(p.dimension()),
            Some(dim) if dim != p.dimension() => {
                return Err(GeoJsonError::DimensionMismatch {
                    expected: dim,
                    found: p.dimension(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(expected)
}
