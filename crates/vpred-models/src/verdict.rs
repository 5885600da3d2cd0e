//! Prediction verdict and its result badge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary outcome of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyViral,
    Unlikely,
}

impl Verdict {
    pub fn is_viral(&self) -> bool {
        matches!(self, Verdict::LikelyViral)
    }

    /// Badge text shown for this verdict.
    pub fn badge(&self) -> &'static str {
        match self {
            Verdict::LikelyViral => "✅ Likely to go VIRAL",
            Verdict::Unlikely => "⚠️ Unlikely to go viral",
        }
    }

    /// Badge style class.
    pub fn class(&self) -> &'static str {
        match self {
            Verdict::LikelyViral => "viral",
            Verdict::Unlikely => "not-viral",
        }
    }
}

impl From<bool> for Verdict {
    fn from(viral: bool) -> Self {
        if viral {
            Verdict::LikelyViral
        } else {
            Verdict::Unlikely
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.badge())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::LikelyViral);
        assert_eq!(Verdict::from(false), Verdict::Unlikely);
        assert!(Verdict::LikelyViral.is_viral());
        assert!(!Verdict::Unlikely.is_viral());
    }

    #[test]
    fn test_badges() {
        assert_eq!(Verdict::LikelyViral.to_string(), "✅ Likely to go VIRAL");
        assert_eq!(Verdict::Unlikely.class(), "not-viral");
    }
}
