//! Validation outcome and rejection reasons

use serde::Serialize;
use thiserror::Error;

/// How a rejection was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Input length mismatch, always checked first
    Structural,
    /// A position or range failed its character class or fixed literal
    Positional,
    /// A segment is not a member of a recognized set
    Lookup,
}

/// Why an input was rejected
///
/// `Display` gives the verbose, human-readable message; [`tag`](Self::tag)
/// gives a stable machine-readable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    #[error("wrong length: expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("the first six characters must be uppercase letters or digits")]
    AlphanumericPrefix,

    #[error("the birth year must be two digits")]
    BirthYear,

    #[error("the birth month must be a letter")]
    BirthMonth,

    #[error("the birth day must be two digits")]
    BirthDay,

    #[error("the municipality code must start with a letter")]
    MunicipalityLetter,

    #[error("the municipality code must end with three digits")]
    MunicipalityDigits,

    #[error("the check character must be a letter")]
    CheckCharacter,

    #[error("the first character must be 0")]
    LeadingZero,

    #[error("the card type code must be 80")]
    CardType,

    #[error("the country code must be 380")]
    CountryCode,

    #[error("the entity code must start with 00")]
    EntityPrefix,

    #[error("entity code not recognized")]
    EntityNotRecognized,

    #[error("trailing segment not numeric")]
    TrailingSegmentNotNumeric,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("rejected")]
    Unspecified,
}

impl RejectionReason {
    /// Stable snake_case identifier for this reason
    pub fn tag(&self) -> &'static str {
        match self {
            Self::WrongLength { .. } => "wrong_length",
            Self::AlphanumericPrefix => "alphanumeric_prefix",
            Self::BirthYear => "birth_year",
            Self::BirthMonth => "birth_month",
            Self::BirthDay => "birth_day",
            Self::MunicipalityLetter => "municipality_letter",
            Self::MunicipalityDigits => "municipality_digits",
            Self::CheckCharacter => "check_character",
            Self::LeadingZero => "leading_zero",
            Self::CardType => "card_type",
            Self::CountryCode => "country_code",
            Self::EntityPrefix => "entity_prefix",
            Self::EntityNotRecognized => "entity_not_recognized",
            Self::TrailingSegmentNotNumeric => "trailing_segment_not_numeric",
            Self::InvalidEmail => "invalid_email",
            Self::Unspecified => "unspecified",
        }
    }

    /// Classify the rejection
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::WrongLength { .. } => RejectionKind::Structural,
            Self::EntityNotRecognized => RejectionKind::Lookup,
            _ => RejectionKind::Positional,
        }
    }
}

/// Result of validating one input
///
/// Serializes as `{"isValid": bool, "error": string|null}`. The structured
/// reason is kept alongside for callers that branch on it, but is not part
/// of the wire shape, so an outcome is written out and never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error: Option<String>,
    #[serde(skip)]
    pub reason: Option<RejectionReason>,
}

impl ValidationOutcome {
    /// A passing outcome
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            reason: None,
        }
    }

    /// A failing outcome
    ///
    /// With `verbose` the error text is the human message, otherwise the tag.
    pub fn rejected(reason: RejectionReason, verbose: bool) -> Self {
        let error = if verbose {
            reason.to_string()
        } else {
            reason.tag().to_string()
        };

        Self {
            is_valid: false,
            error: Some(error),
            reason: Some(reason),
        }
    }

    /// Build an outcome from a grammar check result
    pub fn from_check(result: Result<(), RejectionReason>, verbose: bool) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(reason) => Self::rejected(reason, verbose),
        }
    }

    /// Convert into a `Result`, keyed on `is_valid`
    ///
    /// An invalid outcome assembled without a reason yields
    /// [`RejectionReason::Unspecified`].
    pub fn into_result(self) -> Result<(), RejectionReason> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.reason.unwrap_or(RejectionReason::Unspecified))
        }
    }
}
