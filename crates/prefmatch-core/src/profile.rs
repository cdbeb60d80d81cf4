use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::constants::ATTR_COUNT;
use crate::encode::{AttributeConfig, EncodedAttribute, encode_attribute};
use crate::error::Result;

/// Profile form input: any subset of slots, keyed by slot name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileConfig {
    pub attrs: BTreeMap<Attr, AttributeConfig>,
}

impl ProfileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attr: Attr, config: AttributeConfig) -> Self {
        self.attrs.insert(attr, config);
        self
    }

    pub fn get(&self, attr: Attr) -> Option<&AttributeConfig> {
        self.attrs.get(&attr)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl FromIterator<(Attr, AttributeConfig)> for ProfileConfig {
    fn from_iter<I: IntoIterator<Item = (Attr, AttributeConfig)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}

/// All twelve encoded slots of one profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProfileEncoding {
    records: [EncodedAttribute; ATTR_COUNT],
}

impl ProfileEncoding {
    /// Every slot at its unfilled default.
    pub fn unknown() -> Self {
        Self {
            records: Attr::ALL.map(EncodedAttribute::default_for),
        }
    }

    pub(crate) fn from_records(records: [EncodedAttribute; ATTR_COUNT]) -> Self {
        Self { records }
    }

    pub fn get(&self, attr: Attr) -> &EncodedAttribute {
        &self.records[attr.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attr, &EncodedAttribute)> {
        Attr::ALL.iter().copied().zip(self.records.iter())
    }

    pub fn values(&self) -> [u8; ATTR_COUNT] {
        self.records.map(|r| r.value)
    }

    pub fn pref_masks(&self) -> [u16; ATTR_COUNT] {
        self.records.map(|r| r.pref_mask)
    }

    pub fn pref_mins(&self) -> [u8; ATTR_COUNT] {
        self.records.map(|r| r.pref_min)
    }

    pub fn pref_maxs(&self) -> [u8; ATTR_COUNT] {
        self.records.map(|r| r.pref_max)
    }

    pub fn reveal_flags(&self) -> [bool; ATTR_COUNT] {
        self.records.map(|r| r.reveal_flag)
    }
}

/// Encode every slot independently; slots missing from `config` get their default.
pub fn encode_profile(config: &ProfileConfig) -> Result<ProfileEncoding> {
    tracing::debug!(configured = config.len(), "encoding profile");

    let mut records = ProfileEncoding::unknown().records;
    for (attr, cfg) in &config.attrs {
        let record = encode_attribute(*attr, cfg).map_err(|e| e.in_slot(*attr))?;
        tracing::trace!(
            slot = attr.name(),
            value = record.value,
            mask = record.pref_mask,
            min = record.pref_min,
            max = record.pref_max,
            reveal = record.reveal_flag,
            "encoded slot"
        );
        records[attr.index()] = record;
    }

    Ok(ProfileEncoding::from_records(records))
}
