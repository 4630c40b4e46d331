//! Selection of the rule profile a closure runs with

use deduct_owlrl::{OwlRlExtension, OwlRlProfile};
use deduct_rdfs::RdfsProfile;
use deduct_rules::RuleProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The built-in rule profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    /// RDFS semantics
    Rdfs,
    /// OWL 2 RL
    #[serde(rename = "owlrl")]
    OwlRl,
    /// RDFS + OWL 2 RL with self restrictions, cardinality shortcuts,
    /// disjoint unions and faceted datatypes
    #[serde(rename = "owlrl-ext")]
    OwlRlExtension,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [ProfileKind::Rdfs, ProfileKind::OwlRl, ProfileKind::OwlRlExtension];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Rdfs => "rdfs",
            ProfileKind::OwlRl => "owlrl",
            ProfileKind::OwlRlExtension => "owlrl-ext",
        }
    }

    /// A fresh profile instance for one run
    pub fn build(&self) -> Box<dyn RuleProfile> {
        match self {
            ProfileKind::Rdfs => Box::new(RdfsProfile::new()),
            ProfileKind::OwlRl => Box::new(OwlRlProfile::new()),
            ProfileKind::OwlRlExtension => Box::new(OwlRlExtension::new()),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile: {0} (expected rdfs, owlrl or owlrl-ext)")]
pub struct UnknownProfile(pub String);

impl FromStr for ProfileKind {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_names() {
        assert_eq!("rdfs".parse::<ProfileKind>(), Ok(ProfileKind::Rdfs));
        assert_eq!("owlrl".parse::<ProfileKind>(), Ok(ProfileKind::OwlRl));
        assert_eq!("OWLRL-EXT".parse::<ProfileKind>(), Ok(ProfileKind::OwlRlExtension));
        assert!("owl-dl".parse::<ProfileKind>().is_err());
    }

    #[test]
    fn test_built_profile_names() {
        for kind in ProfileKind::ALL {
            assert_eq!(kind.build().name(), kind.as_str());
            assert_eq!(kind.to_string().parse::<ProfileKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ProfileKind::OwlRlExtension).unwrap();
        assert_eq!(json, "\"owlrl-ext\"");
        let kind: ProfileKind = serde_json::from_str("\"rdfs\"").unwrap();
        assert_eq!(kind, ProfileKind::Rdfs);
    }
}
