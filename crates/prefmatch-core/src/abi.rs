//! The contract call boundary: five parallel 12-element arrays.
//!
//! Field names are camelCase to match the contract's parameter names
//! (`values`, `prefMasks`, `prefMins`, `prefMaxs`, `revealFlags`).

use serde::{Deserialize, Serialize};

use crate::attr::{Attr, AttrKind};
use crate::constants::{
    ATTR_COUNT, CATEGORICAL_MAX, NUMERIC_MAX, NUMERIC_MIN, UNKNOWN_BIT, WILDCARD_MASK,
};
use crate::encode::EncodedAttribute;
use crate::error::{EncodeError, Result};
use crate::profile::ProfileEncoding;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiArrays {
    pub values: [u8; ATTR_COUNT],
    pub pref_masks: [u16; ATTR_COUNT],
    pub pref_mins: [u8; ATTR_COUNT],
    pub pref_maxs: [u8; ATTR_COUNT],
    pub reveal_flags: [bool; ATTR_COUNT],
}

impl ProfileEncoding {
    pub fn to_abi(&self) -> AbiArrays {
        AbiArrays {
            values: self.values(),
            pref_masks: self.pref_masks(),
            pref_mins: self.pref_mins(),
            pref_maxs: self.pref_maxs(),
            reveal_flags: self.reveal_flags(),
        }
    }
}

impl AbiArrays {
    /// Rebuild slot records from raw arrays, rejecting anything the encoder
    /// could not have produced: out-of-range values, 255 as a range bound,
    /// category bits on numeric masks and a revealed numeric wildcard.
    pub fn into_encoding(self) -> Result<ProfileEncoding> {
        let mut records = [EncodedAttribute::default_for(Attr::ExactAge); ATTR_COUNT];
        for (i, attr) in Attr::ALL.iter().copied().enumerate() {
            let record = EncodedAttribute {
                value: self.values[i],
                pref_mask: self.pref_masks[i],
                pref_min: self.pref_mins[i],
                pref_max: self.pref_maxs[i],
                reveal_flag: self.reveal_flags[i],
            };
            check_record(attr, &record).map_err(|e| e.in_slot(attr))?;
            records[i] = record;
        }
        Ok(ProfileEncoding::from_records(records))
    }
}

fn check_record(attr: Attr, record: &EncodedAttribute) -> Result<()> {
    let value_ok = match attr.kind() {
        AttrKind::Numeric => record.value >= 1,
        AttrKind::Categorical => {
            (1..=CATEGORICAL_MAX).contains(&record.value) || record.value == attr.unknown_value()
        }
    };
    if !value_ok {
        return Err(EncodeError::InvalidAbi(format!(
            "value {} is not a valid {} encoding",
            record.value,
            attr.kind()
        )));
    }
    if record.pref_min > NUMERIC_MAX || record.pref_max > NUMERIC_MAX {
        return Err(EncodeError::InvalidAbi(format!(
            "range {}..={} uses the unknown sentinel as a bound",
            record.pref_min, record.pref_max
        )));
    }
    match attr.kind() {
        AttrKind::Categorical if (record.pref_min, record.pref_max) != (0, 0) => {
            return Err(EncodeError::InvalidAbi(format!(
                "categorical slot carries a numeric range {}..={}",
                record.pref_min, record.pref_max
            )));
        }
        // A categorical wildcard may be revealed: CRITERIA accepting every
        // category under LENIENT also yields 0xFFFF.
        AttrKind::Categorical => {}
        AttrKind::Numeric => check_numeric_mask(record)?,
    }
    Ok(())
}

/// Numeric masks carry only the unknown bit (0 or 0x8000) or are the
/// NONE wildcard, which is never revealed and spans the full range.
fn check_numeric_mask(record: &EncodedAttribute) -> Result<()> {
    match record.pref_mask {
        0 | UNKNOWN_BIT => Ok(()),
        WILDCARD_MASK if record.reveal_flag => Err(EncodeError::InvalidAbi(
            "numeric wildcard preference marked for reveal".to_string(),
        )),
        WILDCARD_MASK if (record.pref_min, record.pref_max) != (NUMERIC_MIN, NUMERIC_MAX) => {
            Err(EncodeError::InvalidAbi(format!(
                "numeric wildcard preference with narrowed range {}..={}",
                record.pref_min, record.pref_max
            )))
        }
        WILDCARD_MASK => Ok(()),
        mask => Err(EncodeError::InvalidAbi(format!(
            "numeric mask {mask:#06x} carries category bits"
        ))),
    }
}

/// Serialize a profile encoding to the ABI JSON layout.
pub fn export_json(encoding: &ProfileEncoding) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&encoding.to_abi())
}

/// Parse and validate ABI JSON back into a profile encoding.
pub fn import_json(json: &str) -> Result<ProfileEncoding> {
    let arrays: AbiArrays =
        serde_json::from_str(json).map_err(|e| EncodeError::InvalidAbi(e.to_string()))?;
    arrays.into_encoding()
}
