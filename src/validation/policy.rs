//! Validation policy

use serde::{Deserialize, Serialize};

/// Rule switches shared by every validator
///
/// Maps to the `[validation]` table of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Uppercase fiscal codes before checking them
    #[serde(default = "default_true")]
    pub normalize_case: bool,

    /// Health card codes carry a literal `0` in front of the card type
    #[serde(default = "default_true")]
    pub require_leading_zero: bool,

    /// Report human-readable messages instead of bare reason tags
    #[serde(default = "default_true")]
    pub verbose_reasons: bool,
}

impl ValidationPolicy {
    /// Policy that keeps input case as given
    pub fn strict_case() -> Self {
        Self {
            normalize_case: false,
            ..Self::default()
        }
    }

    /// Set case normalization
    pub fn with_normalize_case(mut self, normalize: bool) -> Self {
        self.normalize_case = normalize;
        self
    }

    /// Set the health card leading zero requirement
    pub fn with_leading_zero(mut self, required: bool) -> Self {
        self.require_leading_zero = required;
        self
    }

    /// Set reason verbosity
    pub fn with_verbose_reasons(mut self, verbose: bool) -> Self {
        self.verbose_reasons = verbose;
        self
    }

    /// Offset of the card type segment in a health card code
    pub fn health_card_offset(&self) -> usize {
        usize::from(self.require_leading_zero)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            normalize_case: true,
            require_leading_zero: true,
            verbose_reasons: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ValidationPolicy::default();
        assert!(policy.normalize_case);
        assert!(policy.require_leading_zero);
        assert!(policy.verbose_reasons);
        assert_eq!(policy.health_card_offset(), 1);
    }

    #[test]
    fn test_builder_switches() {
        let policy = ValidationPolicy::strict_case()
            .with_leading_zero(false)
            .with_verbose_reasons(false);
        assert!(!policy.normalize_case);
        assert_eq!(policy.health_card_offset(), 0);
        assert!(!policy.verbose_reasons);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let policy: ValidationPolicy = toml::from_str("require_leading_zero = false").unwrap();
        assert!(policy.normalize_case);
        assert!(!policy.require_leading_zero);
        assert!(policy.verbose_reasons);
    }
}
