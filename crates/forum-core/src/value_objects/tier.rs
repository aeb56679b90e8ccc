//! Subscription tiers and the tier gate
//!
//! Tiers form a fixed total order: FREE < PRO < SCHOLAR. Content restricted
//! to a tier is visible to that tier and every tier above it.

use serde::{Deserialize, Serialize};

/// Subscription tier, ordered FREE < PRO < SCHOLAR
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionTier {
    Free,
    Pro,
    Scholar,
}

impl SubscriptionTier {
    /// Position in the tier order (FREE = 0)
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Pro => 1,
            Self::Scholar => 2,
        }
    }

    /// Canonical lowercase label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Scholar => "scholar",
        }
    }

    /// Parse a tier label, case-insensitively. Returns `None` for anything
    /// outside the closed tag set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            "scholar" => Some(Self::Scholar),
            _ => None,
        }
    }
}

/// Check whether `user_tier` satisfies `required_tier`.
///
/// Unrecognized tier strings on either side gate permissively (`true`).
pub fn meets_minimum_tier(user_tier: &str, required_tier: &str) -> bool {
    match (
        SubscriptionTier::parse(user_tier),
        SubscriptionTier::parse(required_tier),
    ) {
        (Some(user), Some(required)) => user.rank() >= required.rank(),
        _ => true,
    }
}
