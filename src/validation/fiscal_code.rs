//! Italian fiscal code (codice fiscale) validation
//!
//! Layout of the 16 characters:
//!
//! | Positions | Content                         | Class        |
//! |-----------|---------------------------------|--------------|
//! | 0-5       | surname and name code           | A-Z, 0-9     |
//! | 6-7       | birth year                      | 0-9          |
//! | 8         | birth month                     | A-Z          |
//! | 9-10      | birth day and sex               | 0-9          |
//! | 11        | municipality or foreign state   | A-Z          |
//! | 12-14     | municipality or foreign state   | 0-9          |
//! | 15        | check character                 | A-Z          |
//!
//! The check character is only class-checked; its value is not recomputed.

use super::grammar::{CharClass, Grammar, Rule};
use super::outcome::{RejectionReason, ValidationOutcome};
use super::policy::ValidationPolicy;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Length of a fiscal code
pub const FISCAL_CODE_LENGTH: usize = 16;

static FISCAL_CODE_GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
    use CharClass::{Digit, UpperAlphanumeric, UpperLetter};

    Grammar::new("fiscal_code", FISCAL_CODE_LENGTH)
        .segment(
            0,
            6,
            Rule::Class(UpperAlphanumeric),
            RejectionReason::AlphanumericPrefix,
        )
        .segment(6, 2, Rule::Class(Digit), RejectionReason::BirthYear)
        .segment(8, 1, Rule::Class(UpperLetter), RejectionReason::BirthMonth)
        .segment(9, 2, Rule::Class(Digit), RejectionReason::BirthDay)
        .segment(
            11,
            1,
            Rule::Class(UpperLetter),
            RejectionReason::MunicipalityLetter,
        )
        .segment(12, 3, Rule::Class(Digit), RejectionReason::MunicipalityDigits)
        .segment(15, 1, Rule::Class(UpperLetter), RejectionReason::CheckCharacter)
});

/// Fiscal code validator bound to a policy
#[derive(Debug, Clone, Copy, Default)]
pub struct FiscalCodeValidator {
    policy: ValidationPolicy,
}

impl FiscalCodeValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate `code`, reporting the first failing segment
    pub fn validate(&self, code: &str) -> ValidationOutcome {
        ValidationOutcome::from_check(self.check(code), self.policy.verbose_reasons)
    }

    /// Parse `code` into a [`FiscalCode`]
    ///
    /// The stored text is the normalized form when case normalization is on.
    pub fn parse(&self, code: &str) -> Result<FiscalCode, RejectionReason> {
        let normalized = self.normalize(code);
        FISCAL_CODE_GRAMMAR.check(&normalized)?;
        Ok(FiscalCode(normalized.into_owned()))
    }

    fn check(&self, code: &str) -> Result<(), RejectionReason> {
        FISCAL_CODE_GRAMMAR.check(&self.normalize(code))
    }

    // ASCII-only so the character count never changes
    fn normalize<'a>(&self, code: &'a str) -> Cow<'a, str> {
        if self.policy.normalize_case && code.bytes().any(|b| b.is_ascii_lowercase()) {
            Cow::Owned(code.to_ascii_uppercase())
        } else {
            Cow::Borrowed(code)
        }
    }
}

/// Validate a fiscal code with the default policy
///
/// # Examples
///
/// ```
/// use labkit::validation::validate_fiscal_code;
///
/// assert!(validate_fiscal_code("RSSMRA85M01H501Z").is_valid);
/// assert!(!validate_fiscal_code("RSSMRA85M01H501").is_valid);
/// ```
pub fn validate_fiscal_code(code: &str) -> ValidationOutcome {
    FiscalCodeValidator::default().validate(code)
}

/// A fiscal code that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalCode(String);

impl FiscalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Positions 0-5
    pub fn name_code(&self) -> &str {
        &self.0[0..6]
    }

    /// Positions 6-7
    pub fn birth_year_code(&self) -> &str {
        &self.0[6..8]
    }

    /// Position 8
    pub fn birth_month_code(&self) -> char {
        self.char_at(8)
    }

    /// Positions 9-10; values above 40 denote female holders
    pub fn birth_day_code(&self) -> &str {
        &self.0[9..11]
    }

    /// Positions 11-14
    pub fn municipality_code(&self) -> &str {
        &self.0[11..15]
    }

    /// Position 15
    pub fn check_character(&self) -> char {
        self.char_at(15)
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    // Validated codes are ASCII
    fn char_at(&self, idx: usize) -> char {
        char::from(self.0.as_bytes()[idx])
    }
}

impl fmt::Display for FiscalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FiscalCode {
    type Err = RejectionReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FiscalCodeValidator::default().parse(s)
    }
}

impl TryFrom<String> for FiscalCode {
    type Error = RejectionReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FiscalCode> for String {
    fn from(code: FiscalCode) -> Self {
        code.0
    }
}

impl AsRef<str> for FiscalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
