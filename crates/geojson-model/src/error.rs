//! Error type shared by construction and decoding.

use thiserror::Error;

use crate::types::GeoJsonType;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoJsonError {
    #[error("{owner} requires '{field}'")]
    MissingField {
        owner: &'static str,
        field: &'static str,
    },
    #[error("'{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("unknown discriminator: {0}")]
    UnknownDiscriminator(String),
    #[error("expected {expected}, found {found}")]
    UnexpectedDiscriminator {
        expected: &'static str,
        found: GeoJsonType,
    },
    #[error("cannot construct abstract {0} from a document")]
    AbstractConstructionAttempt(String),
    #[error("position has {found} values, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("position must have 2 or 3 values, found {0}")]
    InvalidPosition(usize),
    #[error("coordinates must be finite")]
    NonFiniteCoordinate,
    #[error("bbox must have 4 or 6 values, found {0}")]
    InvalidBoundingBoxLength(usize),
    #[error("bbox has {len} values but owner is {}", dim_label(.three_dimensional))]
    BoundingBoxDimensionMismatch { len: usize, three_dimensional: bool },
    #[error("id must be a string or a number, found {0}")]
    InvalidIdType(&'static str),
    #[error("document nesting exceeds {0} levels")]
    DepthLimitExceeded(usize),
    #[error("json: {0}")]
    Json(String),
}

fn dim_label(three_dimensional: &bool) -> &'static str {
    if *three_dimensional {
        "3-D"
    } else {
        "2-D"
    }
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(err: serde_json::Error) -> Self {
        GeoJsonError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoJsonError>;
