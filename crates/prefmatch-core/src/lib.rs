//! Attribute and preference encoding for encrypted profile matching.
//!
//! Turns profile attributes (age, religion, kink level, ...) plus the owner's
//! matching policy into the fixed-width plaintexts a dating contract encrypts
//! and compares: a value, a 16-bit preference mask, a numeric range and a
//! reveal flag per slot, twelve slots per profile.
//!
//! Zero I/O. Every function is pure and deterministic, so client and
//! contract always agree on the bit layout.

pub mod abi;
pub mod attr;
pub mod categories;
pub mod constants;
pub mod encode;
pub mod error;
pub mod mask;
pub mod matching;
pub mod policy;
pub mod profile;
pub mod validate;

pub use abi::{AbiArrays, export_json, import_json};
pub use attr::{Attr, AttrKind, is_numeric_attr};
pub use constants::{
    ATTR_COUNT, CATEGORICAL_MAX, CATEGORY_BITS, NUMERIC_MAX, UNKNOWN_BIT, UNKNOWN_CATEGORICAL,
    UNKNOWN_NUMERIC, WILDCARD_MASK,
};
pub use encode::{AttributeConfig, EncodedAttribute, encode_attribute};
pub use error::{EncodeError, Result};
pub use mask::{create_mask, create_pref_mask};
pub use matching::{
    MatchReport, Rejection, SlotVerdict, accepts, check_compatibility, revealed_to_match,
};
pub use policy::{Policy, UnknownHandling};
pub use profile::{ProfileConfig, ProfileEncoding, encode_profile};
pub use validate::{validate_categorical, validate_numeric};
