//! Plaintext mirror of the contract's compatibility check.
//!
//! The contract runs the same comparisons on ciphertexts; this module lets
//! clients and tooling confirm an encoding produces the intended matches.

use crate::attr::{Attr, AttrKind};
use crate::constants::{ATTR_COUNT, MAX_MASK_BIT, UNKNOWN_BIT};
use crate::encode::EncodedAttribute;
use crate::profile::ProfileEncoding;

/// Does `preference` (one side's slot record) accept a counterparty holding `candidate`?
pub fn accepts(attr: Attr, preference: &EncodedAttribute, candidate: u8) -> bool {
    if candidate == attr.unknown_value() {
        return preference.pref_mask & UNKNOWN_BIT != 0;
    }
    match attr.kind() {
        AttrKind::Categorical => {
            candidate <= MAX_MASK_BIT && preference.pref_mask & (1u16 << candidate) != 0
        }
        AttrKind::Numeric => (preference.pref_min..=preference.pref_max).contains(&candidate),
    }
}

/// Outcome of one slot in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotVerdict {
    pub attr: Attr,
    /// A's preference accepts B's value.
    pub a_accepts_b: bool,
    /// B's preference accepts A's value.
    pub b_accepts_a: bool,
}

impl SlotVerdict {
    pub fn is_mutual(&self) -> bool {
        self.a_accepts_b && self.b_accepts_a
    }
}

/// Which side rejected on a blocking slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    ARejectsB,
    BRejectsA,
    Both,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub slots: [SlotVerdict; ATTR_COUNT],
}

impl MatchReport {
    pub fn is_mutual(&self) -> bool {
        self.slots.iter().all(SlotVerdict::is_mutual)
    }

    pub fn blocking(&self) -> Vec<(Attr, Rejection)> {
        self.slots
            .iter()
            .filter_map(|s| match (s.a_accepts_b, s.b_accepts_a) {
                (true, true) => None,
                (false, true) => Some((s.attr, Rejection::ARejectsB)),
                (true, false) => Some((s.attr, Rejection::BRejectsA)),
                (false, false) => Some((s.attr, Rejection::Both)),
            })
            .collect()
    }

    /// What each side learns about the other after a mutual match:
    /// `(revealed to A, revealed to B)`. Empty on both sides without a match.
    pub fn reveals(
        &self,
        a: &ProfileEncoding,
        b: &ProfileEncoding,
    ) -> (Vec<(Attr, u8)>, Vec<(Attr, u8)>) {
        if !self.is_mutual() {
            return (Vec::new(), Vec::new());
        }
        (revealed_to_match(b), revealed_to_match(a))
    }
}

pub fn check_compatibility(a: &ProfileEncoding, b: &ProfileEncoding) -> MatchReport {
    let slots = Attr::ALL.map(|attr| SlotVerdict {
        attr,
        a_accepts_b: accepts(attr, a.get(attr), b.get(attr).value),
        b_accepts_a: accepts(attr, b.get(attr), a.get(attr).value),
    });
    let report = MatchReport { slots };
    tracing::debug!(
        mutual = report.is_mutual(),
        blocking = report.blocking().len(),
        "compatibility checked"
    );
    report
}

/// The owner's own values on slots it marked for disclosure (CRITERIA).
pub fn revealed_to_match(owner: &ProfileEncoding) -> Vec<(Attr, u8)> {
    owner
        .iter()
        .filter(|(_, r)| r.reveal_flag)
        .map(|(attr, r)| (attr, r.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::religion;
    use crate::encode::{AttributeConfig, encode_attribute};
    use crate::policy::{Policy, UnknownHandling};
    use crate::profile::{ProfileConfig, encode_profile};

    fn pref(attr: Attr, cfg: AttributeConfig) -> EncodedAttribute {
        encode_attribute(attr, &cfg).unwrap()
    }

    #[test]
    fn test_categorical_accepts_listed_only() {
        let p = pref(
            Attr::Religion,
            AttributeConfig::new(3, Policy::Criteria, UnknownHandling::Strict)
                .accepting(&[religion::CHRISTIAN, religion::JEWISH]),
        );
        assert!(accepts(Attr::Religion, &p, religion::CHRISTIAN));
        assert!(accepts(Attr::Religion, &p, religion::JEWISH));
        assert!(!accepts(Attr::Religion, &p, religion::ATHEIST));
    }

    #[test]
    fn test_unknown_handling() {
        let strict = pref(
            Attr::Religion,
            AttributeConfig::new(3, Policy::Dealbreaker, UnknownHandling::Strict).accepting(&[3]),
        );
        let lenient = pref(
            Attr::Religion,
            AttributeConfig::new(3, Policy::Dealbreaker, UnknownHandling::Lenient).accepting(&[3]),
        );
        let none = EncodedAttribute::default_for(Attr::Religion);
        assert!(!accepts(Attr::Religion, &strict, 15));
        assert!(accepts(Attr::Religion, &lenient, 15));
        assert!(accepts(Attr::Religion, &none, 15));
    }

    #[test]
    fn test_numeric_range_inclusive() {
        let p = pref(
            Attr::ExactAge,
            AttributeConfig::new(30, Policy::Dealbreaker, UnknownHandling::Strict).with_range(25, 35),
        );
        assert!(!accepts(Attr::ExactAge, &p, 24));
        assert!(accepts(Attr::ExactAge, &p, 25));
        assert!(accepts(Attr::ExactAge, &p, 35));
        assert!(!accepts(Attr::ExactAge, &p, 36));
        assert!(!accepts(Attr::ExactAge, &p, 255));
    }

    #[test]
    fn test_lenient_numeric_accepts_unknown_but_not_out_of_range() {
        let p = pref(
            Attr::KinkLevel,
            AttributeConfig::new(4, Policy::Criteria, UnknownHandling::Lenient).with_range(3, 7),
        );
        assert!(accepts(Attr::KinkLevel, &p, 255));
        assert!(!accepts(Attr::KinkLevel, &p, 8));
    }

    #[test]
    fn test_no_preferences_match_anyone() {
        let a = ProfileEncoding::unknown();
        let b = encode_profile(&ProfileConfig::new().with(
            Attr::ExactAge,
            AttributeConfig::new(40, Policy::None, UnknownHandling::Strict),
        ))
        .unwrap();
        let report = check_compatibility(&a, &b);
        assert!(report.is_mutual());
        assert!(report.blocking().is_empty());
    }

    #[test]
    fn test_one_sided_rejection_blocks() {
        let a = encode_profile(&ProfileConfig::new().with(
            Attr::ExactAge,
            AttributeConfig::new(30, Policy::Dealbreaker, UnknownHandling::Strict).with_range(25, 35),
        ))
        .unwrap();
        let b = encode_profile(&ProfileConfig::new().with(
            Attr::ExactAge,
            AttributeConfig::new(50, Policy::None, UnknownHandling::Strict),
        ))
        .unwrap();
        let report = check_compatibility(&a, &b);
        assert!(!report.is_mutual());
        assert_eq!(report.blocking(), vec![(Attr::ExactAge, Rejection::ARejectsB)]);

        let reversed = check_compatibility(&b, &a);
        assert_eq!(reversed.blocking(), vec![(Attr::ExactAge, Rejection::BRejectsA)]);
    }

    #[test]
    fn test_reveals_only_criteria_after_match() {
        let a = encode_profile(
            &ProfileConfig::new()
                .with(
                    Attr::KinkLevel,
                    AttributeConfig::new(4, Policy::Criteria, UnknownHandling::Lenient).with_range(3, 7),
                )
                .with(
                    Attr::Religion,
                    AttributeConfig::new(3, Policy::Dealbreaker, UnknownHandling::Lenient)
                        .accepting(&[3]),
                ),
        )
        .unwrap();
        let b = encode_profile(
            &ProfileConfig::new()
                .with(Attr::KinkLevel, AttributeConfig::new(5, Policy::None, UnknownHandling::Strict))
                .with(Attr::Religion, AttributeConfig::new(3, Policy::None, UnknownHandling::Strict)),
        )
        .unwrap();

        let report = check_compatibility(&a, &b);
        assert!(report.is_mutual());
        let (to_a, to_b) = report.reveals(&a, &b);
        assert!(to_a.is_empty());
        assert_eq!(to_b, vec![(Attr::KinkLevel, 4)]);
    }

    #[test]
    fn test_nothing_revealed_without_match() {
        let a = encode_profile(&ProfileConfig::new().with(
            Attr::KinkLevel,
            AttributeConfig::new(4, Policy::Criteria, UnknownHandling::Strict).with_range(3, 7),
        ))
        .unwrap();
        let b = ProfileEncoding::unknown();
        let report = check_compatibility(&a, &b);
        assert!(!report.is_mutual());
        assert_eq!(report.reveals(&a, &b), (Vec::new(), Vec::new()));
        assert_eq!(revealed_to_match(&a), vec![(Attr::KinkLevel, 4)]);
    }
}
