//! Italian health insurance card (tessera sanitaria) code validation
//!
//! Layout of the 20 characters, with `o` = 1 when the leading zero is
//! required and 0 otherwise:
//!
//! | Positions      | Content                   | Rule            |
//! |----------------|---------------------------|-----------------|
//! | 0 (if `o`=1)   | leading zero              | `"0"`           |
//! | o..o+2         | card type                 | `"80"`          |
//! | o+2..o+5       | country (Italy)           | `"380"`         |
//! | o+5..o+7       | entity prefix             | `"00"`          |
//! | o+7..o+10      | issuing entity            | registry lookup |
//! | o+10..20       | serial number and check   | digits          |

use super::entity::{self, EntityCode};
use super::grammar::{CharClass, Grammar, Rule};
use super::outcome::{RejectionReason, ValidationOutcome};
use super::policy::ValidationPolicy;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a health card code
pub const HEALTH_CARD_LENGTH: usize = 20;

/// Card type for healthcare benefits
pub const CARD_TYPE: &str = "80";

/// Country code for Italy
pub const COUNTRY_CODE: &str = "380";

/// Fixed prefix of the entity code
pub const ENTITY_PREFIX: &str = "00";

static NO_LEADING_ZERO_GRAMMAR: Lazy<Grammar> = Lazy::new(|| grammar(0));

static LEADING_ZERO_GRAMMAR: Lazy<Grammar> = Lazy::new(|| grammar(1));

/// Shared grammar for an offset of 0 or 1
fn grammar_for(offset: usize) -> &'static Grammar {
    if offset == 0 {
        &NO_LEADING_ZERO_GRAMMAR
    } else {
        &LEADING_ZERO_GRAMMAR
    }
}

/// Build the grammar for a given offset of the card type segment
fn grammar(offset: usize) -> Grammar {
    let o = offset;
    let mut grammar = Grammar::new(
        if o == 0 {
            "health_card"
        } else {
            "health_card_leading_zero"
        },
        HEALTH_CARD_LENGTH,
    );

    if o > 0 {
        grammar = grammar.segment(0, o, Rule::Literal("0"), RejectionReason::LeadingZero);
    }

    grammar
        .segment(o, 2, Rule::Literal(CARD_TYPE), RejectionReason::CardType)
        .segment(o + 2, 3, Rule::Literal(COUNTRY_CODE), RejectionReason::CountryCode)
        .segment(o + 5, 2, Rule::Literal(ENTITY_PREFIX), RejectionReason::EntityPrefix)
        .segment(
            o + 7,
            3,
            Rule::Lookup(entity::is_recognized),
            RejectionReason::EntityNotRecognized,
        )
        .segment(
            o + 10,
            HEALTH_CARD_LENGTH - (o + 10),
            Rule::Class(CharClass::Digit),
            RejectionReason::TrailingSegmentNotNumeric,
        )
}

/// Health card validator bound to a policy
#[derive(Debug, Clone, Copy)]
pub struct HealthCardValidator {
    policy: ValidationPolicy,
    grammar: &'static Grammar,
}

impl HealthCardValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            grammar: grammar_for(policy.health_card_offset()),
            policy,
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate `code`, reporting the first failing segment
    pub fn validate(&self, code: &str) -> ValidationOutcome {
        ValidationOutcome::from_check(self.grammar.check(code), self.policy.verbose_reasons)
    }

    /// Parse `code` into a [`HealthCardCode`]
    pub fn parse(&self, code: &str) -> Result<HealthCardCode, RejectionReason> {
        self.grammar.check(code)?;
        Ok(HealthCardCode {
            code: code.to_string(),
            offset: self.policy.health_card_offset(),
        })
    }
}

impl Default for HealthCardValidator {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

/// Validate a health card code with the default policy
///
/// # Examples
///
/// ```
/// use labkit::validation::validate_health_card_code;
///
/// assert!(validate_health_card_code("08038000120123456789").is_valid);
/// assert!(!validate_health_card_code("08038000999123456789").is_valid);
/// ```
pub fn validate_health_card_code(code: &str) -> ValidationOutcome {
    HealthCardValidator::default().validate(code)
}

/// A health card code that passed validation
///
/// `FromStr` and deserialization accept both layouts and record which one
/// matched; use [`HealthCardValidator::parse`] to enforce a policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HealthCardCode {
    code: String,
    offset: usize,
}

impl HealthCardCode {
    /// Parse a code in either layout
    ///
    /// A leading `0` selects the leading-zero layout. The two layouts never
    /// accept the same string, since the card type must start with `8`.
    pub fn parse_any_layout(code: &str) -> Result<Self, RejectionReason> {
        let offset = usize::from(code.starts_with('0'));
        grammar_for(offset).check(code)?;
        Ok(Self {
            code: code.to_string(),
            offset,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Whether the code carries the leading zero
    pub fn has_leading_zero(&self) -> bool {
        self.offset == 1
    }

    /// Three-digit issuing entity code
    pub fn entity_code(&self) -> &str {
        &self.code[self.offset + 7..self.offset + 10]
    }

    /// Registry entry of the issuing entity
    pub fn entity(&self) -> Option<&'static EntityCode> {
        entity::lookup(self.entity_code())
    }

    /// Digits after the entity code, check digit included
    pub fn serial_number(&self) -> &str {
        &self.code[self.offset + 10..]
    }

    /// Final digit
    pub fn check_digit(&self) -> char {
        char::from(self.code.as_bytes()[HEALTH_CARD_LENGTH - 1])
    }

    pub fn into_inner(self) -> String {
        self.code
    }
}

impl fmt::Display for HealthCardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for HealthCardCode {
    type Err = RejectionReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_any_layout(s)
    }
}

impl TryFrom<String> for HealthCardCode {
    type Error = RejectionReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HealthCardCode> for String {
    fn from(code: HealthCardCode) -> Self {
        code.code
    }
}
