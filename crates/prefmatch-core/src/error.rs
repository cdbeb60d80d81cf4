use std::fmt;

use crate::attr::Attr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    CategoricalOutOfRange(i64),
    NumericOutOfRange(i64),
    MaskBitOutOfRange(i64),
    PrefBoundOutOfRange(i64),
    InvalidAbi(String),
    /// Any of the above, tagged with the slot being encoded.
    Slot { attr: Attr, source: Box<EncodeError> },
}

impl EncodeError {
    pub(crate) fn in_slot(self, attr: Attr) -> Self {
        EncodeError::Slot {
            attr,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::CategoricalOutOfRange(v) => {
                write!(f, "categorical value out of range: {v} (expected 1-14)")
            }
            EncodeError::NumericOutOfRange(v) => {
                write!(f, "numeric value out of range: {v} (expected 1-254)")
            }
            EncodeError::MaskBitOutOfRange(b) => {
                write!(f, "mask bit out of range: {b} (expected 0-15)")
            }
            EncodeError::PrefBoundOutOfRange(v) => {
                write!(f, "preference bound out of range: {v} (expected 0-254)")
            }
            EncodeError::InvalidAbi(msg) => write!(f, "invalid ABI arrays: {msg}"),
            EncodeError::Slot { attr, source } => write!(f, "{}: {source}", attr.name()),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Slot { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
