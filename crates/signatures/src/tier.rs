use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Tone classification of a signature.
///
/// Tiers are ordered by intensity. Parsing is case-insensitive; the
/// canonical spelling is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Unbothered,
    Unhinged,
    Unleashed,
}

impl Tier {
    /// Every tier, in intensity order.
    pub const ALL: [Tier; 3] = [Tier::Unbothered, Tier::Unhinged, Tier::Unleashed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Unbothered => "unbothered",
            Tier::Unhinged => "unhinged",
            Tier::Unleashed => "unleashed",
        }
    }

    /// Human-readable blurb shown by the service descriptor.
    pub const fn description(self) -> &'static str {
        match self {
            Tier::Unbothered => "Tier 1: Slightly quirky, mostly professional",
            Tier::Unhinged => "Tier 2: Definitely not HR-approved",
            Tier::Unleashed => "Tier 3: Complete chaos energy",
        }
    }

    /// Canonical names of all tiers, in intensity order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|tier| tier.as_str()).collect()
    }

    /// Case-insensitive lookup. Returns `None` for anything that is not a tier.
    pub fn parse(raw: &str) -> Option<Tier> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::parse(s).ok_or_else(|| StoreError::UnknownTier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Tier::parse("unhinged"), Some(Tier::Unhinged));
        assert_eq!(Tier::parse("UNHINGED"), Some(Tier::Unhinged));
        assert_eq!(Tier::parse("UnLeAsHeD"), Some(Tier::Unleashed));
    }

    #[test]
    fn parse_rejects_unknown_and_padded_values() {
        assert_eq!(Tier::parse("chaotic"), None);
        assert_eq!(Tier::parse(""), None);
        assert_eq!(Tier::parse(" unbothered"), None);
        assert!("view".parse::<Tier>().is_err());
    }

    #[test]
    fn names_are_lowercase_and_ordered() {
        assert_eq!(Tier::names(), vec!["unbothered", "unhinged", "unleashed"]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Tier::Unleashed).unwrap();
        assert_eq!(json, "\"unleashed\"");

        let tier: Tier = serde_json::from_str("\"unbothered\"").unwrap();
        assert_eq!(tier, Tier::Unbothered);

        assert!(serde_json::from_str::<Tier>("\"Unbothered\"").is_err());
    }
}
