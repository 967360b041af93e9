//! Identity-code validation
//!
//! Pure, synchronous validators for the identity documents a booking form
//! collects:
//!
//! - [`validate_fiscal_code`]: Italian fiscal code, 16 characters
//! - [`validate_health_card_code`]: health insurance card code, 20 characters
//! - [`validate_email`] and [`is_blank`]: auxiliary field checks
//!
//! Every validator returns a [`ValidationOutcome`]; malformed input is the
//! expected case and never produces an error or a panic. Rule differences
//! between deployments (case normalization, the card's leading zero,
//! message verbosity) live in one [`ValidationPolicy`].
//!
//! # Example
//!
//! ```
//! use labkit::validation::{ValidationPolicy, Validator};
//!
//! let validator = Validator::new(ValidationPolicy::default().with_leading_zero(false));
//! assert!(validator.fiscal_code("rssmra85m01h501z").is_valid);
//! assert!(validator.health_card("80380001201234567890").is_valid);
//! ```

pub mod email;
pub mod entity;
pub mod fiscal_code;
pub mod grammar;
pub mod health_card;
pub mod outcome;
pub mod policy;

pub use email::{is_blank, validate_email, validate_email_with};
pub use entity::{EntityCode, EntityKind, ENTITY_CODES};
pub use fiscal_code::{validate_fiscal_code, FiscalCode, FiscalCodeValidator};
pub use health_card::{validate_health_card_code, HealthCardCode, HealthCardValidator};
pub use outcome::{RejectionKind, RejectionReason, ValidationOutcome};
pub use policy::ValidationPolicy;

/// All validators configured from one policy
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fiscal_code: FiscalCodeValidator,
    health_card: HealthCardValidator,
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            fiscal_code: FiscalCodeValidator::new(policy),
            health_card: HealthCardValidator::new(policy),
            policy,
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn fiscal_code(&self, code: &str) -> ValidationOutcome {
        self.fiscal_code.validate(code)
    }

    pub fn health_card(&self, code: &str) -> ValidationOutcome {
        self.health_card.validate(code)
    }

    pub fn email(&self, text: &str) -> ValidationOutcome {
        validate_email_with(text, self.policy.verbose_reasons)
    }

    pub fn parse_fiscal_code(&self, code: &str) -> Result<FiscalCode, RejectionReason> {
        self.fiscal_code.parse(code)
    }

    pub fn parse_health_card(&self, code: &str) -> Result<HealthCardCode, RejectionReason> {
        self.health_card.parse(code)
    }
}
