//! Content moderation collaborator
//!
//! Default implementation of the `ContentValidator` port: length bounds plus
//! a blocked-term scan. Checks run in order and the first violation wins,
//! matching how the upstream moderation service reports.

use forum_core::traits::{ContentValidator, ContentViolation};

/// Terms rejected outright. The production deny-list lives in the moderation
/// service; this local list covers the worst offenders when that service is
/// bypassed (tests, local development).
const BLOCKED_TERMS: &[&str] = &["spamlink.", "buy followers", "crypto giveaway"];

/// Length- and term-based content validator
#[derive(Debug, Clone)]
pub struct DefaultContentValidator {
    max_length: usize,
}

impl DefaultContentValidator {
    /// Create a validator with the given maximum content length, in
    /// characters
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl ContentValidator for DefaultContentValidator {
    fn validate(&self, content: &str) -> Result<(), ContentViolation> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ContentViolation("Reply content must not be empty".into()));
        }
        if trimmed.chars().count() > self.max_length {
            return Err(ContentViolation(format!(
                "Reply content must be at most {} characters",
                self.max_length
            )));
        }

        let lowered = trimmed.to_lowercase();
        for term in BLOCKED_TERMS {
            if lowered.contains(term) {
                return Err(ContentViolation(
                    "Reply content contains prohibited language".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> DefaultContentValidator {
        DefaultContentValidator::new(50)
    }

    #[test]
    fn test_accepts_ordinary_content() {
        assert!(validator().validate("A perfectly fine reply.").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let err = validator().validate("   ").unwrap_err();
        assert!(err.0.contains("must not be empty"));
    }

    #[test]
    fn test_rejects_over_length() {
        let err = validator().validate(&"x".repeat(51)).unwrap_err();
        assert!(err.0.contains("at most 50"));
    }

    #[test]
    fn test_rejects_blocked_terms_case_insensitively() {
        let err = validator().validate("Join my CRYPTO Giveaway now").unwrap_err();
        assert!(err.0.contains("prohibited"));
    }

    #[test]
    fn test_first_violation_wins() {
        // Over-length AND containing a blocked term: length is checked first
        let long_spam = format!("buy followers {}", "x".repeat(60));
        let err = validator().validate(&long_spam).unwrap_err();
        assert!(err.0.contains("at most 50"));
    }
}
