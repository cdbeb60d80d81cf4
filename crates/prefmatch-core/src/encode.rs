use serde::{Deserialize, Serialize};

use crate::attr::{Attr, AttrKind};
use crate::constants::{NUMERIC_MAX, NUMERIC_MIN, WILDCARD_MASK};
use crate::error::Result;
use crate::mask::{accepted_bits, create_pref_mask, unknown_bit};
use crate::policy::{Policy, UnknownHandling};
use crate::validate::{validate_bound, validate_categorical, validate_numeric};

/// One attribute as entered on the profile form.
///
/// Raw integers are kept wide so out-of-range input reaches validation
/// instead of failing at parse time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AttributeConfig {
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub policy: Policy,
    #[serde(default)]
    pub unknown_handling: UnknownHandling,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted_values: Vec<i64>,
}

impl AttributeConfig {
    pub fn new(value: i64, policy: Policy, unknown_handling: UnknownHandling) -> Self {
        Self {
            value: Some(value),
            policy,
            unknown_handling,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.pref_min = Some(min);
        self.pref_max = Some(max);
        self
    }

    pub fn accepting(mut self, values: &[u8]) -> Self {
        self.accepted_values = values.iter().copied().map(i64::from).collect();
        self
    }
}

/// The plaintext record for one slot, exactly as it will be encrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodedAttribute {
    pub value: u8,
    pub pref_mask: u16,
    pub pref_min: u8,
    pub pref_max: u8,
    pub reveal_flag: bool,
}

impl EncodedAttribute {
    /// Record for a slot the owner never filled in.
    pub fn default_for(attr: Attr) -> Self {
        let (pref_min, pref_max) = wildcard_range(attr.kind());
        Self {
            value: attr.unknown_value(),
            pref_mask: WILDCARD_MASK,
            pref_min,
            pref_max,
            reveal_flag: false,
        }
    }
}

fn wildcard_range(kind: AttrKind) -> (u8, u8) {
    match kind {
        AttrKind::Numeric => (NUMERIC_MIN, NUMERIC_MAX),
        AttrKind::Categorical => (0, 0),
    }
}

/// Encode one slot. Numeric ranges are taken as configured; unknown
/// tolerance lives only in bit 15 of the mask and never widens the range.
pub fn encode_attribute(attr: Attr, config: &AttributeConfig) -> Result<EncodedAttribute> {
    let kind = attr.kind();
    let value = match kind {
        AttrKind::Numeric => validate_numeric(config.value)?,
        AttrKind::Categorical => validate_categorical(config.value)?,
    };

    if !config.policy.filters() {
        let (pref_min, pref_max) = wildcard_range(kind);
        return Ok(EncodedAttribute {
            value,
            pref_mask: WILDCARD_MASK,
            pref_min,
            pref_max,
            reveal_flag: false,
        });
    }

    // Dealbreaker and Criteria build the same filter; only the reveal flag differs.
    let (pref_mask, pref_min, pref_max) = match kind {
        AttrKind::Numeric => (
            unknown_bit(config.unknown_handling),
            validate_bound(config.pref_min, NUMERIC_MIN)?,
            validate_bound(config.pref_max, NUMERIC_MAX)?,
        ),
        AttrKind::Categorical => (
            create_pref_mask(
                &accepted_bits(&config.accepted_values)?,
                config.policy,
                config.unknown_handling,
            )?,
            0,
            0,
        ),
    };

    Ok(EncodedAttribute {
        value,
        pref_mask,
        pref_min,
        pref_max,
        reveal_flag: config.policy.reveals(),
    })
}
