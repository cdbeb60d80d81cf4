//! The twelve fixed profile attribute slots.
//!
//! Slot order is the index order of every parallel array handed to the
//! matching contract, so variants must never be reordered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ATTR_COUNT, UNKNOWN_CATEGORICAL, UNKNOWN_NUMERIC};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attr {
    ExactAge,
    BiologicalSex,
    GenderIdentity,
    Kids,
    KidsTimeline,
    Relocate,
    Education,
    Drinking,
    Smoking,
    Drugs,
    Religion,
    KinkLevel,
}

/// How a slot's value is encoded and compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    /// 1-254, compared against a `[prefMin, prefMax]` range.
    Numeric,
    /// 1-14, compared against the accepted-category bits of the mask.
    Categorical,
}

impl Attr {
    pub const ALL: [Attr; ATTR_COUNT] = [
        Attr::ExactAge,
        Attr::BiologicalSex,
        Attr::GenderIdentity,
        Attr::Kids,
        Attr::KidsTimeline,
        Attr::Relocate,
        Attr::Education,
        Attr::Drinking,
        Attr::Smoking,
        Attr::Drugs,
        Attr::Religion,
        Attr::KinkLevel,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Attr> {
        Attr::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Attr::ExactAge => "EXACT_AGE",
            Attr::BiologicalSex => "BIOLOGICAL_SEX",
            Attr::GenderIdentity => "GENDER_IDENTITY",
            Attr::Kids => "KIDS",
            Attr::KidsTimeline => "KIDS_TIMELINE",
            Attr::Relocate => "RELOCATE",
            Attr::Education => "EDUCATION",
            Attr::Drinking => "DRINKING",
            Attr::Smoking => "SMOKING",
            Attr::Drugs => "DRUGS",
            Attr::Religion => "RELIGION",
            Attr::KinkLevel => "KINK_LEVEL",
        }
    }

    pub fn kind(self) -> AttrKind {
        if is_numeric_attr(self) {
            AttrKind::Numeric
        } else {
            AttrKind::Categorical
        }
    }

    /// The encoded value standing for "not provided" in this slot.
    pub fn unknown_value(self) -> u8 {
        match self.kind() {
            AttrKind::Numeric => UNKNOWN_NUMERIC,
            AttrKind::Categorical => UNKNOWN_CATEGORICAL,
        }
    }
}

/// Numeric slots carry a raw number (age, kink level); everything else is a category.
pub fn is_numeric_attr(attr: Attr) -> bool {
    matches!(attr, Attr::ExactAge | Attr::KinkLevel)
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Attr::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown attribute slot: {s}"))
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKind::Numeric => f.write_str("numeric"),
            AttrKind::Categorical => f.write_str("categorical"),
        }
    }
}
