use serde::{Deserialize, Serialize};

/// How a profile owner filters counterparties on one attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Policy {
    /// No preference: wildcard mask and range, never revealed.
    #[default]
    None,
    /// Hard filter whose criterion stays hidden even from a match.
    Dealbreaker,
    /// Same filter as `Dealbreaker`, but revealed to a mutual match.
    Criteria,
}

impl Policy {
    pub fn reveals(self) -> bool {
        matches!(self, Policy::Criteria)
    }

    pub fn filters(self) -> bool {
        !matches!(self, Policy::None)
    }
}

/// Whether a counterparty with an unknown value passes the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnknownHandling {
    #[default]
    Strict,
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_criteria_reveals() {
        assert!(!Policy::None.reveals());
        assert!(!Policy::Dealbreaker.reveals());
        assert!(Policy::Criteria.reveals());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Policy::Dealbreaker).unwrap(),
            "\"DEALBREAKER\""
        );
        let h: UnknownHandling = serde_json::from_str("\"LENIENT\"").unwrap();
        assert_eq!(h, UnknownHandling::Lenient);
    }
}
