//! Range validation for raw attribute values.
//!
//! Absent input and 0 ("unspecified") both collapse to the slot's unknown
//! sentinel. Anything else outside the legal range is rejected, never clamped.

use crate::constants::{CATEGORICAL_MAX, NUMERIC_MAX, UNKNOWN_CATEGORICAL, UNKNOWN_NUMERIC};
use crate::error::{EncodeError, Result};

pub fn validate_categorical(value: Option<i64>) -> Result<u8> {
    match value {
        None | Some(0) => Ok(UNKNOWN_CATEGORICAL),
        Some(v) if (1..=i64::from(CATEGORICAL_MAX)).contains(&v) => Ok(v as u8),
        Some(v) => Err(EncodeError::CategoricalOutOfRange(v)),
    }
}

pub fn validate_numeric(value: Option<i64>) -> Result<u8> {
    match value {
        None | Some(0) => Ok(UNKNOWN_NUMERIC),
        Some(v) if (1..=i64::from(NUMERIC_MAX)).contains(&v) => Ok(v as u8),
        Some(v) => Err(EncodeError::NumericOutOfRange(v)),
    }
}

/// A numeric range bound. 0 is a legal bound here; 255 is not.
pub(crate) fn validate_bound(bound: Option<i64>, default: u8) -> Result<u8> {
    match bound {
        None => Ok(default),
        Some(v) if (0..=i64::from(NUMERIC_MAX)).contains(&v) => Ok(v as u8),
        Some(v) => Err(EncodeError::PrefBoundOutOfRange(v)),
    }
}
